//! Client-local state: persisted preferences and per-session scratch values.

pub mod language;
pub mod session;
pub mod store;

pub use language::Language;
pub use session::{SCROLL_KEY, SessionState};
pub use store::{CURRENCY_KEY, LANGUAGE_KEY, Preferences, PrefsError};
