//! fintrack-config
//!
//! Persistent user preferences and runtime configuration.
//! Owns the Settings data structure, its disk persistence, and the
//! resolution of data paths and rate-service parameters.

pub mod error;
pub mod manager;
pub mod model;
pub mod paths;

pub use error::ConfigError;
pub use manager::SettingsManager;
pub use model::{RateServiceConfig, Settings};
pub use paths::AppPaths;
