//! The ordered collection of recorded transactions.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Ordered list of transactions. The position of a record is its identifier
/// for edit and delete; duplicates are allowed.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Overwrites the record at `index`. Returns `false` and leaves the ledger
    /// untouched when the index is out of bounds.
    pub fn replace(&mut self, index: usize, transaction: Transaction) -> bool {
        match self.transactions.get_mut(index) {
            Some(slot) => {
                *slot = transaction;
                true
            }
            None => false,
        }
    }

    /// Removes the record at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Transaction> {
        if index < self.transactions.len() {
            Some(self.transactions.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Maps a signed, user-supplied index onto a valid position.
    pub fn position(&self, raw: i64) -> Option<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|index| *index < self.transactions.len())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}
