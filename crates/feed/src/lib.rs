//! Exchange-rate feed listener.
//!
//! Holds one server-sent-events connection to the rate endpoint and publishes
//! every numeric payload into the rate store. Malformed payloads are dropped;
//! a failed connection is closed and, by default, not retried. The
//! connection never outlives its [`RateFeedListener`] handle.

pub mod error;
pub mod listener;
pub mod sse;

pub use error::FeedError;
pub use listener::{FeedConfig, FeedStatus, RateFeedListener, ReconnectPolicy};
pub use sse::{SseDecoder, SseEvent};
