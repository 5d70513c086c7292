#![doc(test(attr(deny(warnings))))]

//! fintrack records income and expenses in several currencies and reports
//! balance and spending in a single home currency.
//!
//! The building blocks live in the workspace crates (`fintrack-domain`,
//! `fintrack-core`, `fintrack-storage-json`, `fintrack-rates`,
//! `fintrack-config`); this crate composes them into [`app::FinanceManager`]
//! and the terminal front-end.

pub mod app;
pub mod cli;
pub mod errors;
pub mod utils;

pub use app::FinanceManager;
pub use errors::{CliError, FinanceError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fintrack tracing initialized");
    });
}
