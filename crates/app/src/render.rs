//! Text rendering of the home view.

use std::fmt::Write as _;

use clap::ValueEnum;

use storefront_catalog::PageButton;
use storefront_prefs::Language;

use crate::view::ProductRow;

/// Grid or list presentation of the page slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 28;

/// UI strings for the selected display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub empty: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub filters: &'static str,
    pub all: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Labels {
                empty: "No products found.",
                page: "Page",
                of: "of",
                filters: "Filters",
                all: "all",
            },
            Language::Tr => Labels {
                empty: "Ürün bulunamadı.",
                page: "Sayfa",
                of: "/",
                filters: "Filtreler",
                all: "tümü",
            },
        }
    }
}

pub fn render_grid(rows: &[ProductRow]) -> String {
    let mut out = String::new();
    for chunk in rows.chunks(GRID_COLUMNS) {
        let titles: Vec<String> = chunk.iter().map(|r| cell(&r.title)).collect();
        let prices: Vec<String> = chunk.iter().map(|r| cell(&r.price)).collect();
        let _ = writeln!(out, "{}", titles.join(" | ").trim_end());
        let _ = writeln!(out, "{}", prices.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_list(rows: &[ProductRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:<12} {:<30} {:<12} {:>12}",
            row.id,
            truncate(&row.title, 30),
            row.product_type,
            row.price
        );
    }
    out
}

/// `1 … 4 [5] 6 … 10`; current page in brackets.
pub fn render_page_bar(buttons: &[PageButton], current: u32) -> String {
    buttons
        .iter()
        .map(|button| match button {
            PageButton::Page(p) if *p == current => format!("[{p}]"),
            PageButton::Page(p) => p.to_string(),
            PageButton::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell(text: &str) -> String {
    format!("{:<width$}", truncate(text, CARD_WIDTH), width = CARD_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
