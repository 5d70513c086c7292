//! In-memory ledger backed by a persistence backend.
//!
//! Every mutation rewrites the whole ledger through the backend. Storage
//! failures never reach the caller: loads degrade to an empty ledger and
//! failed writes are logged.

use fintrack_domain::{Ledger, Transaction};

use crate::storage::LedgerStorage;

/// Owns the transaction list and keeps the backend in sync with it.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
}

impl LedgerStore {
    /// Opens the store, loading whatever the backend currently holds.
    pub fn open(storage: Box<dyn LedgerStorage>) -> Self {
        let ledger = load_ledger(storage.as_ref());
        Self { ledger, storage }
    }

    /// Re-reads the persisted sequence, discarding unsaved in-memory state.
    pub fn load_all(&mut self) -> &Ledger {
        self.ledger = load_ledger(self.storage.as_ref());
        &self.ledger
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.ledger.push(transaction);
        self.persist();
    }

    /// Overwrites the record at `index`; out-of-range indexes are a no-op.
    pub fn replace(&mut self, index: usize, transaction: Transaction) -> bool {
        if !self.ledger.replace(index, transaction) {
            tracing::debug!(index, len = self.ledger.len(), "replace ignored: index out of range");
            return false;
        }
        self.persist();
        true
    }

    /// Changes only the amount of the record at `index`.
    pub fn edit_amount(&mut self, index: usize, amount: f64) -> bool {
        let Some(updated) = self.ledger.get(index).map(|txn| txn.with_amount(amount)) else {
            tracing::debug!(index, len = self.ledger.len(), "edit ignored: index out of range");
            return false;
        };
        self.replace(index, updated)
    }

    /// Removes the record at `index`; out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Transaction> {
        let removed = self.ledger.remove(index);
        match removed {
            Some(_) => {
                self.persist();
            }
            None => {
                tracing::debug!(index, len = self.ledger.len(), "remove ignored: index out of range");
            }
        }
        removed
    }

    /// Writes the full sequence to the backend. Returns whether the write
    /// succeeded; failures are logged only.
    pub fn persist(&self) -> bool {
        persist_ledger(self.storage.as_ref(), &self.ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.ledger.get(index)
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

/// Loads the persisted ledger, degrading to an empty one when the backend
/// holds nothing or holds something unreadable.
pub fn load_ledger(storage: &dyn LedgerStorage) -> Ledger {
    match storage.load_ledger() {
        Ok(Some(ledger)) => {
            tracing::info!(
                location = %storage.describe(),
                count = ledger.len(),
                "ledger loaded"
            );
            ledger
        }
        Ok(None) => {
            tracing::info!(location = %storage.describe(), "no ledger on disk, starting empty");
            Ledger::new()
        }
        Err(err) => {
            tracing::warn!(
                location = %storage.describe(),
                error = %err,
                "ledger unreadable, starting empty"
            );
            Ledger::new()
        }
    }
}

/// Persists `ledger` through `storage`, logging instead of propagating errors.
pub fn persist_ledger(storage: &dyn LedgerStorage, ledger: &Ledger) -> bool {
    match storage.save_ledger(ledger) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(
                location = %storage.describe(),
                error = %err,
                "failed to save ledger"
            );
            false
        }
    }
}
