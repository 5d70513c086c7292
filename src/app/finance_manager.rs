use std::{collections::BTreeMap, time::Duration};

use fintrack_config::{AppPaths, RateServiceConfig, Settings, SettingsManager};
use fintrack_core::{
    BalanceSummary, CategoryShare, ConvertedRow, LedgerStore, RateCache, RateProvider, SummaryService,
    TransactionService,
};
use fintrack_domain::{CurrencyCode, Transaction};
use fintrack_rates::ExchangeRateApiProvider;
use fintrack_storage_json::JsonLedgerStorage;

use crate::errors::Result;

/// Boxed provider so the manager can run against HTTP or a fixed table.
pub type SharedRateCache = RateCache<Box<dyn RateProvider>>;

/// Facade that composes the ledger store, the rate cache and the settings.
///
/// The home currency lives here; the ledger never sees it, and changing it
/// leaves every stored record untouched.
pub struct FinanceManager {
    store: LedgerStore,
    rates: SharedRateCache,
    settings: Settings,
    settings_manager: SettingsManager,
}

impl FinanceManager {
    pub fn new(
        store: LedgerStore,
        rates: SharedRateCache,
        settings_manager: SettingsManager,
    ) -> Self {
        let settings = settings_manager.load_or_default();
        tracing::debug!(home_currency = %settings.home_currency, "settings loaded");
        Self {
            store,
            rates,
            settings,
            settings_manager,
        }
    }

    /// Wires the JSON ledger, the settings file and the HTTP rate provider
    /// found under `paths`.
    pub fn open(paths: &AppPaths, rate_config: &RateServiceConfig) -> Result<Self> {
        let provider = ExchangeRateApiProvider::new(
            rate_config.base_url.clone(),
            rate_config.api_key.clone(),
            Duration::from_secs(rate_config.timeout_secs),
        )?;
        if !provider.is_configured() {
            tracing::warn!("no exchange-rate API key configured; foreign amounts will not convert");
        }
        let store = LedgerStore::open(Box::new(JsonLedgerStorage::in_dir(paths.data_dir())));
        let provider: Box<dyn RateProvider> = Box::new(provider);
        Ok(Self::new(
            store,
            RateCache::new(provider),
            SettingsManager::new(paths.settings_file()),
        ))
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<()> {
        TransactionService::validate(&transaction)?;
        self.store.append(transaction);
        Ok(())
    }

    /// Changes the amount of the record at `index`. Returns `Ok(false)` when
    /// there is no such record.
    pub fn edit_amount(&mut self, index: i64, amount: f64) -> Result<bool> {
        TransactionService::validate_amount(amount)?;
        Ok(match self.store.ledger().position(index) {
            Some(position) => self.store.edit_amount(position, amount),
            None => false,
        })
    }

    pub fn delete_transaction(&mut self, index: i64) -> Option<Transaction> {
        let position = self.store.ledger().position(index)?;
        self.store.remove(position)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn home_currency(&self) -> CurrencyCode {
        self.settings.home_currency
    }

    /// Switches the home currency and saves the settings. A failed save is
    /// logged; the new currency stays in effect for this session.
    pub fn set_home_currency(&mut self, currency: CurrencyCode) {
        self.settings.home_currency = currency;
        if let Err(err) = self.settings_manager.save(&self.settings) {
            tracing::error!(
                path = %self.settings_manager.settings_path().display(),
                error = %err,
                "failed to save settings"
            );
        }
    }

    pub fn balance(&mut self) -> f64 {
        let base = self.settings.home_currency;
        SummaryService::balance(self.store.transactions(), base, &mut self.rates)
    }

    /// Balance plus the number of records that could not be converted, from
    /// a single round of rate lookups.
    pub fn balance_summary(&mut self) -> BalanceSummary {
        SummaryService::summarize(&self.rows())
    }

    pub fn rows(&mut self) -> Vec<ConvertedRow<'_>> {
        let base = self.settings.home_currency;
        SummaryService::converted_rows(self.store.transactions(), base, &mut self.rates)
    }

    pub fn expenses_by_category(&mut self) -> BTreeMap<String, f64> {
        let base = self.settings.home_currency;
        SummaryService::expenses_by_category(self.store.transactions(), base, &mut self.rates)
    }

    pub fn expense_breakdown(&mut self) -> Vec<CategoryShare> {
        let base = self.settings.home_currency;
        SummaryService::expense_shares(self.store.transactions(), base, &mut self.rates)
    }

    pub fn rate_cache(&self) -> &SharedRateCache {
        &self.rates
    }
}
