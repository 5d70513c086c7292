//! Parsing and validation of user-supplied transaction fields.

use chrono::NaiveDate;
use fintrack_domain::{CurrencyCode, Transaction, TransactionKind, UnknownCurrency};

use crate::CoreError;

pub struct TransactionService;

impl TransactionService {
    /// Parses an amount entered by the user. Amounts are magnitudes, so
    /// negative and non-finite values are rejected.
    pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("invalid amount `{}`", raw.trim())))?;
        Self::validate_amount(value)?;
        Ok(value)
    }

    pub fn validate_amount(value: f64) -> Result<(), CoreError> {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!("amount {value} is not finite")));
        }
        if value < 0.0 {
            return Err(CoreError::Validation(
                "amount must not be negative; use the transaction type for direction".into(),
            ));
        }
        Ok(())
    }

    pub fn parse_currency(raw: &str) -> Result<CurrencyCode, CoreError> {
        raw.parse()
            .map_err(|err: UnknownCurrency| CoreError::Validation(err.to_string()))
    }

    pub fn parse_kind(raw: &str) -> Result<TransactionKind, CoreError> {
        raw.parse().map_err(CoreError::Validation)
    }

    /// Parses an ISO `YYYY-MM-DD` date.
    pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            CoreError::Validation(format!(
                "invalid date `{}` (expected YYYY-MM-DD)",
                raw.trim()
            ))
        })
    }

    pub fn validate(transaction: &Transaction) -> Result<(), CoreError> {
        Self::validate_amount(transaction.amount)?;
        if transaction.category.trim().is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        Ok(())
    }

    /// Builds a validated record from raw form fields. A missing date means
    /// today.
    pub fn build(
        amount: &str,
        currency: &str,
        category: &str,
        kind: &str,
        date: Option<&str>,
    ) -> Result<Transaction, CoreError> {
        let mut transaction = Transaction::new(
            Self::parse_amount(amount)?,
            Self::parse_currency(currency)?,
            category.trim(),
            Self::parse_kind(kind)?,
        );
        if let Some(raw) = date {
            transaction = transaction.with_date(Self::parse_date(raw)?);
        }
        Self::validate(&transaction)?;
        Ok(transaction)
    }
}
