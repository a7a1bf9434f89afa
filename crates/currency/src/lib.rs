//! Currency selection, live exchange-rate state and price formatting.
//!
//! The rate is held in an explicit store (`rate_store()`): one publisher
//! (the feed listener) and any number of cloned readers (grid view, list
//! view, detail view). Formatting itself is pure.

pub mod currency;
pub mod formatter;
pub mod rate;

pub use currency::Currency;
pub use formatter::{PriceFormatter, convert, format};
pub use rate::{ExchangeRate, RatePublisher, RateReader, RateSnapshot, rate_store};
