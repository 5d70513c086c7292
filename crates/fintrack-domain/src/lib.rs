//! fintrack-domain
//!
//! Pure domain models (Transaction, Ledger, currency codes).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod currency;
pub mod ledger;
pub mod transaction;

pub use common::*;
pub use currency::*;
pub use ledger::*;
pub use transaction::*;
