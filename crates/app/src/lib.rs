//! `storefront`
//!
//! **Responsibility:** composes the home view from the catalog fetcher, the
//! filter/paginate engine, the live rate store and persisted preferences, and
//! renders it as text.
//!
//! The remote API remains the authority for everything; this is a thin shell.

pub mod config;
pub mod render;
pub mod view;

pub use config::AppConfig;
pub use render::{Labels, Layout};
pub use view::{HomeView, ProductRow};
