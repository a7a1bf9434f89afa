//! Identifiers used across the storefront.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Identifier of a product.
///
/// Opaque to the client: issued by the remote catalog service and only ever
/// compared and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Result<Self, StorefrontError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StorefrontError::invalid_id("ProductId: empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
