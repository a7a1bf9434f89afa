//! Session-scoped values (lost when the process exits).

use std::collections::HashMap;

/// Key holding the home view's scroll offset while the shopper is elsewhere.
pub const SCROLL_KEY: &str = "homeScrollPosition";

#[derive(Debug, Default, Clone)]
pub struct SessionState {
    values: HashMap<String, String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the home view's scroll offset when navigating away.
    pub fn save_scroll(&mut self, offset: f64) {
        self.values.insert(SCROLL_KEY.to_string(), offset.to_string());
    }

    /// Consume the saved offset on return; the slot is cleared either way.
    pub fn take_scroll(&mut self) -> Option<f64> {
        let raw = self.values.remove(SCROLL_KEY)?;
        match raw.parse::<f64>() {
            Ok(offset) if offset.is_finite() => Some(offset),
            _ => {
                tracing::debug!(raw, "discarding unusable scroll position");
                None
            }
        }
    }
}
