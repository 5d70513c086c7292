//! Exchange-rate lookup with a per-process memo.
//!
//! A rate is "units of target per unit of source": multiply a source amount
//! by it to obtain the target amount.

use std::collections::HashMap;

use fintrack_domain::CurrencyCode;

use crate::RateError;

/// Remote lookup of a single conversion rate.
pub trait RateProvider {
    fn fetch_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<f64, RateError>;
}

impl<P: RateProvider + ?Sized> RateProvider for Box<P> {
    fn fetch_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<f64, RateError> {
        (**self).fetch_rate(from, to)
    }
}

/// Anything able to answer "how many `to` per `from`", or `None` when the
/// rate cannot be resolved.
pub trait RateSource {
    fn rate(&mut self, from: CurrencyCode, to: CurrencyCode) -> Option<f64>;
}

/// Caches successful lookups for the lifetime of the value.
///
/// Identity pairs always resolve to `1.0` without touching the provider.
/// Failed lookups are not remembered, so the next request for the same pair
/// retries.
pub struct RateCache<P> {
    provider: P,
    rates: HashMap<(CurrencyCode, CurrencyCode), f64>,
}

impl<P: RateProvider> RateCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            rates: HashMap::new(),
        }
    }

    /// Resolves the rate for the ordered pair, calling the provider at most
    /// once per pair that succeeds.
    pub fn rate(&mut self, from: CurrencyCode, to: CurrencyCode) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(*rate);
        }
        match self.provider.fetch_rate(from, to) {
            Ok(rate) if rate.is_finite() && rate > 0.0 => {
                tracing::debug!(%from, %to, rate, "exchange rate cached");
                self.rates.insert((from, to), rate);
                Some(rate)
            }
            Ok(rate) => {
                tracing::warn!(%from, %to, rate, "rate service returned an unusable rate");
                None
            }
            Err(err) => {
                tracing::warn!(%from, %to, error = %err, "exchange rate unavailable");
                None
            }
        }
    }

    /// Returns a rate only if it is already known, without any lookup.
    pub fn cached(&self, from: CurrencyCode, to: CurrencyCode) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        self.rates.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: RateProvider> RateSource for RateCache<P> {
    fn rate(&mut self, from: CurrencyCode, to: CurrencyCode) -> Option<f64> {
        RateCache::<P>::rate(self, from, to)
    }
}

/// Fixed table of rates, handy for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<(CurrencyCode, CurrencyCode), f64>,
}

impl StaticRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, from: CurrencyCode, to: CurrencyCode, rate: f64) -> Self {
        self.rates.insert((from, to), rate);
        self
    }
}

impl RateProvider for StaticRates {
    fn fetch_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<f64, RateError> {
        self.rates
            .get(&(from, to))
            .copied()
            .ok_or_else(|| RateError::Payload(format!("no rate for {from}/{to}")))
    }
}
