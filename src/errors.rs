use std::result::Result as StdResult;

use fintrack_config::ConfigError;
use fintrack_core::{CoreError, RateError};
use thiserror::Error;

/// Unified error type for the core, storage, configuration and rate layers.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Rate service error: {0}")]
    RateError(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<CoreError> for FinanceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Storage(message) | CoreError::Serde(message) => {
                FinanceError::StorageError(message)
            }
            CoreError::Io(err) => FinanceError::StorageError(err.to_string()),
            CoreError::Validation(message) | CoreError::InvalidOperation(message) => {
                FinanceError::InvalidInput(message)
            }
        }
    }
}

impl From<ConfigError> for FinanceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FinanceError::StorageError(io.to_string()),
            ConfigError::Serde(message) => FinanceError::ConfigError(message),
        }
    }
}

impl From<RateError> for FinanceError {
    fn from(err: RateError) -> Self {
        FinanceError::RateError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_invalid_input() {
        let err = FinanceError::from(CoreError::Validation("invalid amount `x`".into()));
        assert!(matches!(err, FinanceError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: invalid amount `x`");
    }

    #[test]
    fn config_serde_errors_map_to_config_error() {
        let err = FinanceError::from(ConfigError::Serde("bad".into()));
        assert!(matches!(err, FinanceError::ConfigError(_)));
    }
}
