use std::fs;

use fintrack_config::{ConfigError, Settings, SettingsManager};
use fintrack_domain::CurrencyCode;
use tempfile::tempdir;

#[test]
fn default_settings_use_usd() {
    assert_eq!(Settings::default().home_currency, CurrencyCode::USD);
}

#[test]
fn settings_manager_persists_and_loads_settings() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::in_dir(dir.path());

    let settings = Settings {
        home_currency: CurrencyCode::JPY,
    };
    manager.save(&settings).expect("save settings");

    let raw = fs::read_to_string(manager.settings_path()).expect("read settings");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["home_currency"], "JPY");
    assert_eq!(manager.load().expect("load settings"), settings);
}

#[test]
fn missing_settings_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::in_dir(&dir.path().join("never-created"));
    assert_eq!(manager.load().expect("load"), Settings::default());
}

#[test]
fn malformed_settings_degrade_to_usd() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::in_dir(dir.path());

    fs::write(manager.settings_path(), "home_currency = EUR").expect("write garbage");
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    assert_eq!(manager.load_or_default().home_currency, CurrencyCode::USD);

    fs::write(manager.settings_path(), r#"{"home_currency": "DOGE"}"#).expect("write unknown");
    assert_eq!(manager.load_or_default().home_currency, CurrencyCode::USD);

    fs::write(manager.settings_path(), r#"{"theme": "dark"}"#).expect("write missing key");
    assert_eq!(manager.load_or_default().home_currency, CurrencyCode::USD);
}

#[test]
fn failed_save_leaves_no_temporary_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let manager = SettingsManager::new(path.clone());
    assert!(manager.save(&Settings::default()).is_err());
    assert!(!dir.path().join("settings.json.tmp").exists());
}
