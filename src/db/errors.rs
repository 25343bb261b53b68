//! Datastore error types.

use thiserror::Error;

/// Errors from the data access layer.
///
/// Payloads carry the driver's failure text; the HTTP boundary surfaces
/// it verbatim.
#[derive(Debug, Clone, Error)]
pub enum DbError {
    /// Missing or invalid connection parameter
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Connection establishment failed
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Query execution or row decoding failed
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Result type for data access operations
pub type DbResult<T> = Result<T, DbError>;
