//! Long-lived rate feed connection.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use storefront_currency::RatePublisher;

use crate::error::FeedError;
use crate::sse::SseDecoder;

/// What to do after the connection drops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReconnectPolicy {
    /// Close and keep serving the last known rate.
    #[default]
    Never,
    /// Retry with exponential backoff: `base_delay * 2^(attempt-1)`, capped at
    /// `max_delay`, at most `max_attempts` times in a row.
    Backoff {
        max_attempts: u32,
        base_delay: Duration,
        max_delay: Duration,
    },
}

impl ReconnectPolicy {
    /// Delay before retry number `attempt` (1-based), or `None` to give up.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        match self {
            ReconnectPolicy::Never => None,
            ReconnectPolicy::Backoff {
                max_attempts,
                base_delay,
                max_delay,
            } => {
                if attempt == 0 || attempt > *max_attempts {
                    return None;
                }
                let factor = 1u32 << (attempt - 1).min(16);
                Some(base_delay.saturating_mul(factor).min(*max_delay))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub reconnect: ReconnectPolicy,
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(10),
            reconnect: ReconnectPolicy::Never,
        }
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Open,
    Closed,
}

/// Owner of the feed task. Dropping it closes the connection.
#[derive(Debug)]
pub struct RateFeedListener {
    task: JoinHandle<()>,
    status: watch::Receiver<FeedStatus>,
}

impl RateFeedListener {
    /// Open the feed on a background task. Must be called inside a tokio runtime.
    pub fn spawn(config: FeedConfig, publisher: RatePublisher) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(FeedError::Client)?;

        let (status_tx, status) = watch::channel(FeedStatus::Connecting);
        let task = tokio::spawn(run(client, config, publisher, status_tx));

        Ok(Self { task, status })
    }

    pub fn status(&self) -> FeedStatus {
        *self.status.borrow()
    }

    /// Wait until the feed has closed on its own (error, end of stream,
    /// reconnects exhausted).
    pub async fn closed(&mut self) {
        let _ = self
            .status
            .wait_for(|status| *status == FeedStatus::Closed)
            .await;
    }

    /// Close the connection now.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for RateFeedListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: reqwest::Client,
    config: FeedConfig,
    publisher: RatePublisher,
    status: watch::Sender<FeedStatus>,
) {
    let mut attempt = 0u32;
    loop {
        status.send_replace(FeedStatus::Connecting);
        let mut opened = false;

        match stream_rates(&client, &config, &publisher, &status, &mut opened).await {
            Ok(()) => tracing::info!(url = %config.url, "rate feed ended by server"),
            Err(err) => tracing::warn!(url = %config.url, error = %err, "rate feed closed"),
        }

        if opened {
            attempt = 0;
        }
        attempt += 1;
        let Some(delay) = config.reconnect.delay_for(attempt) else {
            break;
        };
        tracing::info!(attempt, delay_ms = delay.as_millis() as u64, "reconnecting rate feed");
        tokio::time::sleep(delay).await;
    }

    status.send_replace(FeedStatus::Closed);
    tracing::info!(last_rate = %publisher.current(), "rate feed stopped; serving last known rate");
}

async fn stream_rates(
    client: &reqwest::Client,
    config: &FeedConfig,
    publisher: &RatePublisher,
    status: &watch::Sender<FeedStatus>,
    opened: &mut bool,
) -> Result<(), FeedError> {
    let response = client
        .get(&config.url)
        .header(ACCEPT, "text/event-stream")
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(FeedError::Connect)?;

    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }

    *opened = true;
    status.send_replace(FeedStatus::Open);
    tracing::info!(url = %config.url, "rate feed connected");

    let mut decoder = SseDecoder::new();
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(FeedError::Stream)?;
        for event in decoder.push(&chunk) {
            if event.is_message() {
                publisher.publish_payload(&event.data);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_policy_gives_up_immediately() {
        assert_eq!(ReconnectPolicy::Never.delay_for(1), None);
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = ReconnectPolicy::Backoff {
            max_attempts: 5,
            base_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(2),
        };
        assert_eq!(policy.delay_for(1), Some(Duration::from_millis(300)));
        assert_eq!(policy.delay_for(2), Some(Duration::from_millis(600)));
        assert_eq!(policy.delay_for(3), Some(Duration::from_millis(1200)));
        assert_eq!(policy.delay_for(4), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_for(6), None);
    }
}
