//! fintrack-core
//!
//! Ledger store, exchange-rate cache and aggregation services.
//! Depends on fintrack-domain. No CLI, no terminal I/O, no concrete file or
//! network access; those arrive through the `LedgerStorage` and
//! `RateProvider` traits.

pub mod error;
pub mod ledger_service;
pub mod rates;
pub mod storage;
pub mod summary_service;
pub mod transaction_service;

pub use error::{CoreError, RateError};
pub use ledger_service::*;
pub use rates::*;
pub use storage::*;
pub use summary_service::*;
pub use transaction_service::*;
