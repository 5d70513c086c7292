use fintrack_domain::CurrencyCode;
use serde::{Deserialize, Serialize};

/// User preferences persisted next to the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Currency every displayed and aggregated value is converted into.
    #[serde(default)]
    pub home_currency: CurrencyCode,
}

pub const API_KEY_ENV: &str = "FINTRACK_API_KEY";
pub const RATES_URL_ENV: &str = "FINTRACK_RATES_URL";
pub const DEFAULT_RATES_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection parameters for the exchange-rate service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateServiceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RateServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RATES_URL.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RateServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Blank
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            base_url: read(RATES_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key: read(API_KEY_ENV),
            timeout_secs: defaults.timeout_secs,
        }
    }
}
