use fintrack::FinanceManager;
use fintrack_config::SettingsManager;
use fintrack_core::{LedgerStore, RateCache, RateProvider, StaticRates};
use fintrack_domain::{CurrencyCode, Transaction, TransactionKind};
use fintrack_storage_json::JsonLedgerStorage;
use tempfile::TempDir;

fn open_manager(dir: &TempDir, rates: StaticRates) -> FinanceManager {
    let provider: Box<dyn RateProvider> = Box::new(rates);
    FinanceManager::new(
        LedgerStore::open(Box::new(JsonLedgerStorage::in_dir(dir.path()))),
        RateCache::new(provider),
        SettingsManager::in_dir(dir.path()),
    )
}

fn tx(amount: f64, currency: CurrencyCode, category: &str, kind: TransactionKind) -> Transaction {
    Transaction::new(amount, currency, category, kind)
}

#[test]
fn balance_in_home_currency() {
    let dir = TempDir::new().unwrap();
    let mut manager = open_manager(&dir, StaticRates::new());
    manager
        .add_transaction(tx(100.0, CurrencyCode::USD, "Salary", TransactionKind::Income))
        .unwrap();
    manager
        .add_transaction(tx(40.0, CurrencyCode::USD, "Food", TransactionKind::Expense))
        .unwrap();

    assert!((manager.balance() - 60.0).abs() < 1e-9);
}

#[test]
fn foreign_expense_converts_into_balance_and_categories() {
    let dir = TempDir::new().unwrap();
    let rates = StaticRates::new().with_rate(CurrencyCode::EUR, CurrencyCode::USD, 1.1);
    let mut manager = open_manager(&dir, rates);
    manager
        .add_transaction(tx(10.0, CurrencyCode::EUR, "Food", TransactionKind::Expense))
        .unwrap();

    assert!((manager.balance() + 11.0).abs() < 1e-9);
    let by_category = manager.expenses_by_category();
    assert_eq!(by_category.len(), 1);
    assert!((by_category["Food"] - 11.0).abs() < 1e-9);
    assert_eq!(manager.rate_cache().len(), 1);
}

#[test]
fn missing_rate_contributes_zero() {
    let dir = TempDir::new().unwrap();
    let mut manager = open_manager(&dir, StaticRates::new());
    manager
        .add_transaction(tx(50.0, CurrencyCode::GBP, "Rent", TransactionKind::Expense))
        .unwrap();
    manager
        .add_transaction(tx(5.0, CurrencyCode::USD, "Food", TransactionKind::Expense))
        .unwrap();

    assert!((manager.balance() + 5.0).abs() < 1e-9);
    let rows = manager.rows();
    assert_eq!(rows[0].converted, None);
    assert_eq!(rows[1].converted, Some(5.0));
    assert!(manager.rate_cache().is_empty());
}

#[test]
fn malformed_settings_default_to_usd() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let manager = open_manager(&dir, StaticRates::new());
    assert_eq!(manager.home_currency(), CurrencyCode::USD);
}

#[test]
fn ledger_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut manager = open_manager(&dir, StaticRates::new());
        manager
            .add_transaction(tx(12.5, CurrencyCode::CAD, "Transport", TransactionKind::Expense))
            .unwrap();
        manager
            .add_transaction(tx(300.0, CurrencyCode::JPY, "Food", TransactionKind::Expense))
            .unwrap();
        assert!(manager.edit_amount(1, 450.0).unwrap());
        manager.set_home_currency(CurrencyCode::CAD);
    }

    let manager = open_manager(&dir, StaticRates::new());
    assert_eq!(manager.home_currency(), CurrencyCode::CAD);
    let records = manager.transactions();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category, "Transport");
    assert_eq!(records[1].amount, 450.0);
    assert_eq!(records[1].currency, CurrencyCode::JPY);
}
