//! Shared error model.

use thiserror::Error;

/// Result type used across the client-side domain.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Client-side domain error.
///
/// Transport failures (HTTP, feed, disk) have their own error types in the
/// crates that own that IO. This covers only deterministic failures on data
/// the client already holds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// A value failed validation (e.g. malformed catalog record).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was empty or malformed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value outside a fixed enumeration (currency code, language tag).
    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

impl StorefrontError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
        }
    }
}
