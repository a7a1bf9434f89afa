//! Process configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use storefront_feed::{FeedConfig, ReconnectPolicy};
use storefront_observability::LogFormat;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_FEED_WAIT_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog API (`STOREFRONT_API_URL`).
    pub api_url: String,
    /// Exchange-rate SSE endpoint (`STOREFRONT_RATE_FEED_URL`).
    pub rate_feed_url: String,
    /// Preferences file (`STOREFRONT_PREFS_PATH`); `None` when the platform
    /// has no config dir and nothing was set.
    pub prefs_path: Option<PathBuf>,
    /// How long the CLI waits for a first rate before rendering non-USD
    /// prices (`STOREFRONT_FEED_WAIT_MS`).
    pub feed_wait: Duration,
    /// Reconnect attempts after the feed drops (`STOREFRONT_FEED_RECONNECT_ATTEMPTS`);
    /// zero disables reconnection.
    pub feed_reconnect_attempts: u32,
    /// `STOREFRONT_LOG_FORMAT=pretty` for human-readable logs.
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("STOREFRONT_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let rate_feed_url = lookup("STOREFRONT_RATE_FEED_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("{api_url}/exchange-rate/stream"));

        let prefs_path = lookup("STOREFRONT_PREFS_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(storefront_prefs::Preferences::default_path);

        let feed_wait = Duration::from_millis(parse_or(
            &lookup,
            "STOREFRONT_FEED_WAIT_MS",
            DEFAULT_FEED_WAIT_MS,
        ));
        let feed_reconnect_attempts = parse_or(&lookup, "STOREFRONT_FEED_RECONNECT_ATTEMPTS", 0);
        let log_format = LogFormat::from_env_value(lookup("STOREFRONT_LOG_FORMAT").as_deref());

        Self {
            api_url,
            rate_feed_url,
            prefs_path,
            feed_wait,
            feed_reconnect_attempts,
            log_format,
        }
    }

    pub fn feed_config(&self) -> FeedConfig {
        let reconnect = if self.feed_reconnect_attempts == 0 {
            ReconnectPolicy::Never
        } else {
            ReconnectPolicy::Backoff {
                max_attempts: self.feed_reconnect_attempts,
                base_delay: Duration::from_millis(300),
                max_delay: Duration::from_secs(10),
            }
        };
        FeedConfig::new(self.rate_feed_url.clone()).with_reconnect(reconnect)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + Copy + core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, raw = %raw, %default, "malformed numeric setting; using default");
            default
        }),
    }
}
