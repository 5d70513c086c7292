//! Domain models for income and expense records.

use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{common::*, currency::CurrencyCode};

/// A single financial event, stored in its original currency.
///
/// The field names on disk follow the ledger file layout:
/// `original_amount`, `currency`, `category`, `type`, `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "original_amount")]
    pub amount: f64,
    pub currency: CurrencyCode,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    /// Creates a record dated today.
    pub fn new(
        amount: f64,
        currency: CurrencyCode,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            amount,
            currency,
            category: category.into(),
            kind,
            date: Local::now().date_naive(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Returns a copy carrying a different amount; every other field is kept.
    pub fn with_amount(&self, amount: f64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} {} {} ({})",
            self.date, self.kind, self.amount, self.currency, self.category
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Direction of a transaction's effect on the balance.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// +1 for income, -1 for expense.
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Income => 1.0,
            TransactionKind::Expense => -1.0,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

/// Category labels offered by the entry form. Any other label is accepted too.
pub const PRESET_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Rent",
    "Salary",
    "Freelance",
    "Shopping",
    "Bills",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_ledger_file_keys() {
        let txn = Transaction::new(12.5, CurrencyCode::EUR, "Food", TransactionKind::Expense)
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["original_amount"], 12.5);
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["type"], "Expense");
        assert_eq!(value["date"], "2024-03-09");
    }

    #[test]
    fn rejects_unknown_currency_on_deserialize() {
        let raw = r#"{"original_amount":1.0,"currency":"XYZ","category":"Food","type":"Income","date":"2024-01-01"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn new_transactions_default_to_today() {
        let txn = Transaction::new(1.0, CurrencyCode::USD, "Bills", TransactionKind::Expense);
        assert_eq!(txn.date, Local::now().date_naive());
    }

    #[test]
    fn with_amount_keeps_other_fields() {
        let original = Transaction::new(40.0, CurrencyCode::CAD, "Rent", TransactionKind::Expense);
        let edited = original.with_amount(55.0);
        assert_eq!(edited.amount, 55.0);
        assert_eq!(edited.currency, original.currency);
        assert_eq!(edited.category, original.category);
        assert_eq!(edited.kind, original.kind);
        assert_eq!(edited.date, original.date);
    }

    #[test]
    fn kind_parses_loosely_and_signs() {
        assert_eq!("INCOME".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
        assert_eq!(TransactionKind::Income.sign(), 1.0);
        assert_eq!(TransactionKind::Expense.sign(), -1.0);
    }
}
