//! Balance and expense aggregation in the home currency.
//!
//! Every function here reads a ledger snapshot and never mutates it. A record
//! whose rate cannot be resolved contributes nothing to any total.

use std::collections::BTreeMap;

use fintrack_domain::{CurrencyCode, Transaction, TransactionKind};

use crate::rates::RateSource;

/// One ledger record paired with its value in the home currency.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedRow<'a> {
    pub index: usize,
    pub transaction: &'a Transaction,
    /// `None` when no rate was available.
    pub converted: Option<f64>,
}

impl ConvertedRow<'_> {
    /// Signed contribution to the balance, zero when unconverted.
    pub fn contribution(&self) -> f64 {
        self.converted.unwrap_or(0.0) * self.transaction.kind.sign()
    }
}

/// Share of total expenses held by one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Percentage of all expenses, `0.0..=100.0`.
    pub percent: f64,
}

/// Balance together with how many records fell back to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    pub balance: f64,
    pub unconverted: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Converts a single record into `base`.
    pub fn convert(
        transaction: &Transaction,
        base: CurrencyCode,
        rates: &mut impl RateSource,
    ) -> Option<f64> {
        rates
            .rate(transaction.currency, base)
            .map(|rate| transaction.amount * rate)
    }

    pub fn converted_rows<'a>(
        transactions: &'a [Transaction],
        base: CurrencyCode,
        rates: &mut impl RateSource,
    ) -> Vec<ConvertedRow<'a>> {
        transactions
            .iter()
            .enumerate()
            .map(|(index, transaction)| ConvertedRow {
                index,
                transaction,
                converted: Self::convert(transaction, base, &mut *rates),
            })
            .collect()
    }

    /// Income minus expenses, all converted into `base`.
    pub fn balance(
        transactions: &[Transaction],
        base: CurrencyCode,
        rates: &mut impl RateSource,
    ) -> f64 {
        Self::summarize(&Self::converted_rows(transactions, base, rates)).balance
    }

    /// Balance and unconverted count taken from one set of rows, so both
    /// always agree.
    pub fn summarize(rows: &[ConvertedRow<'_>]) -> BalanceSummary {
        BalanceSummary {
            balance: rows.iter().map(ConvertedRow::contribution).sum(),
            unconverted: rows.iter().filter(|row| row.converted.is_none()).count(),
        }
    }

    /// Sums converted expenses per category label. Categories whose total is
    /// zero are left out.
    pub fn expenses_by_category(
        transactions: &[Transaction],
        base: CurrencyCode,
        rates: &mut impl RateSource,
    ) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for txn in transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense)
        {
            let value = Self::convert(txn, base, &mut *rates).unwrap_or(0.0);
            *totals.entry(txn.category.clone()).or_insert(0.0) += value;
        }
        totals.retain(|_, total| total.abs() >= f64::EPSILON);
        totals
    }

    /// Expense totals with their percentage of all expenses, largest first.
    pub fn expense_shares(
        transactions: &[Transaction],
        base: CurrencyCode,
        rates: &mut impl RateSource,
    ) -> Vec<CategoryShare> {
        let totals = Self::expenses_by_category(transactions, base, rates);
        let grand_total: f64 = totals.values().sum();
        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, total)| CategoryShare {
                percent: if grand_total.abs() < f64::EPSILON {
                    0.0
                } else {
                    total / grand_total * 100.0
                },
                category,
                total,
            })
            .collect();
        shares.sort_by(|a, b| b.total.total_cmp(&a.total));
        shares
    }
}
