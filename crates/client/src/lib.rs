//! `storefront-client`: read access to the remote catalog service.
//!
//! The API is the authority; this crate only fetches the full product list
//! once per view mount. Filtering and pagination happen client-side in
//! `storefront-catalog`.

pub mod catalog;
pub mod error;

pub use catalog::{CatalogSource, HttpCatalog, load_catalog};
pub use error::FetchError;
