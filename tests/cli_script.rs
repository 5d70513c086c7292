use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn fintrack(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FINTRACK_API_KEY")
        .env_remove("FINTRACK_CLI_SCRIPT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "\
add 100 USD Salary income 2024-01-05
add 40 USD Food expense 2024-01-06
balance
breakdown
list
exit
";

    fintrack(home.path())
        .env("FINTRACK_CLI_SCRIPT", "1")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added #0"))
        .stdout(contains("Added #1"))
        .stdout(contains("Balance: +60.00 USD"))
        .stdout(contains("100.0%"))
        .stdout(contains("Value (USD)"));

    let json = std::fs::read_to_string(home.path().join("finance_data.json")).unwrap();
    assert!(json.contains("\"original_amount\": 100.0"));
    assert!(json.contains("\"type\": \"Expense\""));
}

#[test]
fn script_mode_reports_errors_and_continues() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .env("FINTRACK_CLI_SCRIPT", "1")
        .write_stdin("add abc USD Food expense\nbalanse\nbalance\n")
        .assert()
        .success()
        .stdout(contains("invalid amount `abc`"))
        .stdout(contains("Did you mean `balance`?"))
        .stdout(contains("Balance: 0.00 USD"));
}

#[test]
fn one_shot_commands_share_the_ledger_file() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .args(["add", "25", "USD", "Eating out", "expense"])
        .assert()
        .success();
    fintrack(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Eating out"))
        .stdout(contains("25.00 USD"));
    fintrack(home.path())
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(contains("Removed #0"));
    fintrack(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions recorded."));
}

#[test]
fn invalid_input_fails_one_shot() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .args(["add", "abc", "USD", "Food", "expense"])
        .assert()
        .failure()
        .stderr(contains("invalid amount `abc`"));
    fintrack(home.path())
        .args(["edit", "first", "10"])
        .assert()
        .failure()
        .stderr(contains("invalid index `first`"));
    fintrack(home.path())
        .args(["add", "5", "XYZ", "Food", "expense"])
        .assert()
        .failure()
        .stderr(contains("XYZ"));
    fintrack(home.path())
        .arg("balanse")
        .assert()
        .failure()
        .stderr(contains("did you mean `balance`?"));
}

#[test]
fn out_of_range_index_changes_nothing() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .args(["remove", "5"])
        .assert()
        .success()
        .stdout(contains("No transaction #5; nothing changed."));
    fintrack(home.path())
        .args(["edit", "-1", "10"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));
    assert!(!home.path().join("finance_data.json").exists());
}

#[test]
fn home_currency_persists_between_runs() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .args(["base", "eur"])
        .assert()
        .success()
        .stdout(contains("Home currency set to EUR."));
    fintrack(home.path())
        .arg("base")
        .assert()
        .success()
        .stdout(contains("Home currency: EUR"));

    let settings = std::fs::read_to_string(home.path().join("settings.json")).unwrap();
    assert!(settings.contains("\"EUR\""));
}

#[test]
fn foreign_amounts_without_rates_count_as_zero() {
    let home = TempDir::new().unwrap();
    fintrack(home.path())
        .args(["add", "10", "EUR", "Food", "expense"])
        .assert()
        .success();
    fintrack(home.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: 0.00 USD"))
        .stdout(contains("1 transaction(s) could not be converted"));
    fintrack(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("unavailable"));
    fintrack(home.path())
        .arg("chart")
        .assert()
        .success()
        .stdout(contains("No expenses."));
}
