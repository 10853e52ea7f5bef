//! Error types for the Cantinho backend.

use thiserror::Error;

/// Result type alias using Cantinho's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Cantinho operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No document store is configured or reachable (service-degraded mode)
    #[error("Database service not available")]
    StoreUnavailable,

    /// An account already exists under the requested code
    #[error("Access code already in use: {0}")]
    DuplicateAccount(String),

    /// No account exists under the given code
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Security question or answer did not match the stored account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Document store rejected a write or delete
    #[error("Write failed: {0}")]
    Write(String),

    /// Document store rejected a read or query
    #[error("Query failed: {0}")]
    Query(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
