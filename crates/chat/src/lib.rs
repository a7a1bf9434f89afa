//! Support-chat rate-limit mirror.
//!
//! Mirrors the server's daily message quota and per-message length limit so
//! the widget can disable submission early. Advisory only: the server checks
//! again on every submission and its answer always wins.

pub mod quota;

pub use quota::{ChatQuota, QuotaError};
