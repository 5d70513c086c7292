//! The fixed set of currencies the ledger accepts.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// ISO 4217 currency code restricted to the supported set.
///
/// Serialized as the bare code (`"USD"`); any other string fails to
/// deserialize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::JPY,
        CurrencyCode::CAD,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::CAD => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::JPY => "¥",
            CurrencyCode::CAD => "CA$",
        }
    }

    pub fn minor_units(&self) -> u8 {
        match self {
            CurrencyCode::JPY => 0,
            _ => 2,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::USD
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names a currency outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency `{}`", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim().to_ascii_uppercase();
        CurrencyCode::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == code)
            .ok_or_else(|| UnknownCurrency(value.trim().to_string()))
    }
}
