//! Display currencies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::{StorefrontError, ValueObject};

/// Currency a shopper can pick for price display.
///
/// Catalog prices are always USD; any other selection is converted with the
/// live exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Try,
}

impl ValueObject for Currency {}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Try];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Try => "TRY",
        }
    }

    /// Symbol printed in front of the amount.
    pub fn prefix(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Try => "₺",
        }
    }

    pub fn is_usd(self) -> bool {
        self == Currency::Usd
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StorefrontError::unknown("currency", s))
    }
}
