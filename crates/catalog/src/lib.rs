//! Catalog module.
//!
//! The read-only product snapshot fetched at view mount, plus the
//! filter/paginate engine that derives the visible page from it. Pure logic:
//! no IO, no HTTP, no rendering.

pub mod filter;
pub mod pager;
pub mod product;

pub use filter::FilterSet;
pub use pager::{PAGE_SIZE, PageButton, Pager, page_buttons};
pub use product::{Product, ProductType};
