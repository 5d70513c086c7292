//! fintrack-rates
//!
//! Blocking HTTP client for the ExchangeRate-API "pair" endpoint.

use std::time::Duration;

use fintrack_core::{RateError, RateProvider};
use fintrack_domain::CurrencyCode;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Fetches live conversion rates, one currency pair per request.
///
/// Requests go to `{base_url}/{api_key}/pair/{FROM}/{TO}`.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rate: Option<f64>,
}

impl ExchangeRateApiProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RateError::Transport(format!("failed to create HTTP client: {err}")))?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    /// Uses a caller-built client, e.g. one with custom proxy settings.
    pub fn with_client(base_url: impl Into<String>, api_key: Option<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Endpoint for one pair, or `None` without an API key.
    pub fn pair_url(&self, from: CurrencyCode, to: CurrencyCode) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| format!("{}/{}/pair/{}/{}", self.base_url, key, from, to))
    }
}

impl RateProvider for ExchangeRateApiProvider {
    fn fetch_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<f64, RateError> {
        let url = self.pair_url(from, to).ok_or_else(|| {
            RateError::NotConfigured("no API key; set FINTRACK_API_KEY".into())
        })?;
        tracing::debug!(%from, %to, "requesting exchange rate");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| RateError::Transport(err.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(RateError::Status(response.status().as_u16()));
        }

        let body: PairResponse = response
            .json()
            .map_err(|err| RateError::Payload(err.without_url().to_string()))?;

        if body.result.as_deref() == Some("error") {
            return Err(RateError::Payload(
                body.error_type
                    .unwrap_or_else(|| "service reported an error".into()),
            ));
        }
        body.conversion_rate
            .ok_or_else(|| RateError::Payload("missing `conversion_rate`".into()))
    }
}
