//! Filter/paginate engine.
//!
//! Three inputs (catalog snapshot, filter set, requested page) and one derived
//! output (the page slice and page count). The derived view is recomputed
//! synchronously whenever an input changes, so callers never observe a stale
//! combination.

use std::collections::BTreeSet;

use crate::filter::FilterSet;
use crate::product::{Product, ProductType};

/// Products per page.
pub const PAGE_SIZE: usize = 12;

/// One entry of the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(u32),
    Ellipsis,
}

/// Page-number bar for `current` out of `total` pages.
///
/// Shows page 1, the last page and `current ± 1`; every other run of pages
/// collapses into a single [`PageButton::Ellipsis`]. Pages come out strictly
/// increasing and deduplicated. `total == 0` yields an empty bar.
pub fn page_buttons(current: u32, total: u32) -> Vec<PageButton> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let visible: BTreeSet<u32> = [1, current.saturating_sub(1), current, current.saturating_add(1), total]
        .into_iter()
        .filter(|p| (1..=total).contains(p))
        .collect();

    let mut buttons = Vec::with_capacity(visible.len() * 2);
    let mut previous: Option<u32> = None;
    for page in visible {
        if let Some(prev) = previous {
            if page - prev > 1 {
                buttons.push(PageButton::Ellipsis);
            }
        }
        buttons.push(PageButton::Page(page));
        previous = Some(page);
    }
    buttons
}

/// Filter/paginate state over a read-only catalog snapshot.
#[derive(Debug, Clone)]
pub struct Pager {
    catalog: Vec<Product>,
    filter: FilterSet,
    /// Indices into `catalog` that pass `filter`, in catalog order.
    filtered: Vec<usize>,
    current_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::empty()
    }
}

impl Pager {
    pub fn new(catalog: Vec<Product>) -> Self {
        let mut pager = Self {
            catalog,
            filter: FilterSet::new(),
            filtered: Vec::new(),
            current_page: 1,
        };
        pager.refilter();
        pager
    }

    /// A pager over an empty catalog (zero products, zero pages).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Swap in a fresh catalog snapshot, keeping the filter and clamping the
    /// current page into the new range.
    pub fn replace_catalog(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
        self.refilter();
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    /// Replace the filter selection. Always resets the cursor to page 1.
    pub fn set_filter(&mut self, filter: FilterSet) {
        self.filter = filter;
        self.refilter();
        self.current_page = 1;
    }

    /// Select or deselect one type. Always resets the cursor to page 1.
    pub fn toggle_type(&mut self, product_type: ProductType) {
        let mut filter = self.filter.clone();
        filter.toggle(product_type);
        self.set_filter(filter);
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(FilterSet::new());
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        u32::try_from(self.filtered.len().div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Move the cursor to page `n`.
    ///
    /// Returns `false` and leaves state untouched when `n` is outside
    /// `1..=total_pages`. A `true` return is the caller's cue to scroll the
    /// view back to the top.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages() {
            tracing::trace!(requested = n, total = self.total_pages(), "page out of range");
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// The filtered catalog, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        self.filtered.iter().map(|&i| &self.catalog[i])
    }

    /// Products on the current page. Empty when nothing matches the filter.
    pub fn page_slice(&self) -> Vec<&Product> {
        self.slice_for(self.current_page)
    }

    /// Products on page `page` (1-based); empty for out-of-range pages.
    pub fn slice_for(&self, page: u32) -> Vec<&Product> {
        if page < 1 {
            return Vec::new();
        }
        let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
        self.filtered
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|&i| &self.catalog[i])
            .collect()
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.current_page, self.total_pages())
    }

    /// Distinct product types in first-seen catalog order, for the filter menu.
    pub fn available_types(&self) -> Vec<&ProductType> {
        let mut seen = BTreeSet::new();
        self.catalog
            .iter()
            .map(|p| &p.product_type)
            .filter(|t| seen.insert(*t))
            .collect()
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect();
    }
}
