//! `storefront-core`: shared building blocks for the storefront crates.
//!
//! Pure types only (no IO, no HTTP).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{StorefrontError, StorefrontResult};
pub use id::ProductId;
pub use value_object::ValueObject;
