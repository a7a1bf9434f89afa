use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to connect to rate feed: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("rate feed responded with status {0}")]
    Status(u16),
    #[error("rate feed stream error: {0}")]
    Stream(#[source] reqwest::Error),
}
