use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Failure modes of a single exchange-rate lookup.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate service unreachable: {0}")]
    Transport(String),
    #[error("rate service responded with HTTP {0}")]
    Status(u16),
    #[error("malformed rate payload: {0}")]
    Payload(String),
    #[error("rate service not configured: {0}")]
    NotConfigured(String),
}
