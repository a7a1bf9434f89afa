//! Home view: catalog snapshot + filter/paginate state + live price formatting.

use std::fmt::Write as _;

use storefront_catalog::{FilterSet, Pager, Product, ProductType};
use storefront_client::{CatalogSource, load_catalog};
use storefront_currency::{Currency, PriceFormatter};
use storefront_prefs::Language;

use crate::render::{self, Labels, Layout};

/// One product as displayed: every field already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub product_type: String,
    pub price: String,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pager: Pager,
    formatter: PriceFormatter,
    labels: Labels,
}

impl HomeView {
    pub fn new(catalog: Vec<Product>, formatter: PriceFormatter, language: Language) -> Self {
        Self {
            pager: Pager::new(catalog),
            formatter,
            labels: Labels::for_language(language),
        }
    }

    /// Fetch the catalog and build the view. A failed fetch mounts an empty view.
    pub async fn mount(
        source: &dyn CatalogSource,
        formatter: PriceFormatter,
        language: Language,
    ) -> Self {
        Self::new(load_catalog(source).await, formatter, language)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn set_filter(&mut self, types: impl IntoIterator<Item = ProductType>) {
        self.pager.set_filter(types.into_iter().collect::<FilterSet>());
    }

    pub fn toggle_type(&mut self, product_type: ProductType) {
        self.pager.toggle_type(product_type);
    }

    /// `true` when the page changed (the caller scrolls to the top).
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pager.go_to_page(page)
    }

    pub fn currency(&self) -> Currency {
        self.formatter.currency()
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.formatter.set_currency(currency);
    }

    /// Display rows for the current page.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.pager
            .page_slice()
            .into_iter()
            .map(|p| ProductRow {
                id: p.id.to_string(),
                title: p.title.clone(),
                product_type: p.product_type.to_string(),
                price: self.formatter.format(p.price),
                image: p.image.clone(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pager.filtered_len() == 0
    }

    pub fn render(&self, layout: Layout) -> String {
        let mut out = String::new();

        let selected: Vec<&str> = self.pager.filter().iter().map(ProductType::as_str).collect();
        let available: Vec<&str> = self
            .pager
            .available_types()
            .into_iter()
            .map(ProductType::as_str)
            .collect();
        let _ = writeln!(
            out,
            "{}: {} [{}]",
            self.labels.filters,
            if selected.is_empty() {
                self.labels.all.to_string()
            } else {
                selected.join(", ")
            },
            available.join(", ")
        );
        out.push('\n');

        if self.is_empty() {
            let _ = writeln!(out, "{}", self.labels.empty);
            return out;
        }

        let rows = self.rows();
        out.push_str(&match layout {
            Layout::Grid => render::render_grid(&rows),
            Layout::List => render::render_list(&rows),
        });

        let _ = writeln!(
            out,
            "{}",
            render::render_page_bar(&self.pager.page_buttons(), self.pager.current_page())
        );
        let _ = writeln!(
            out,
            "{} {} {} {}",
            self.labels.page,
            self.pager.current_page(),
            self.labels.of,
            self.pager.total_pages()
        );
        out
    }
}
