use std::cell::{Cell, RefCell};

use fintrack_domain::Ledger;

use crate::CoreError;

/// Abstraction over the backend holding the persisted ledger.
///
/// `load_ledger` returns `Ok(None)` when nothing has been written yet and an
/// error when the stored data cannot be read or parsed, so callers can tell a
/// fresh start from a corrupt file.
pub trait LedgerStorage {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError>;
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError>;
    /// Human readable location used in log lines.
    fn describe(&self) -> String;
}

/// Volatile storage used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryLedgerStorage {
    stored: RefCell<Option<Ledger>>,
    writes: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryLedgerStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        let storage = Self::default();
        storage.stored.replace(Some(ledger));
        storage
    }

    pub fn stored(&self) -> Option<Ledger> {
        self.stored.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl LedgerStorage for MemoryLedgerStorage {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError> {
        if self.fail_reads.get() {
            return Err(CoreError::Serde("simulated corrupt ledger".into()));
        }
        Ok(self.stored.borrow().clone())
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        if self.fail_writes.get() {
            return Err(CoreError::Storage("simulated write failure".into()));
        }
        self.stored.replace(Some(ledger.clone()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}

impl<S: LedgerStorage + ?Sized> LedgerStorage for std::rc::Rc<S> {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError> {
        (**self).load_ledger()
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        (**self).save_ledger(ledger)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
