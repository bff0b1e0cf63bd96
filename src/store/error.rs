//! Store-specific error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the SQLite read layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database cannot be opened or a connection checked out
    #[error("data store unavailable: {0}")]
    Unavailable(String),

    /// A query failed during execution
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}
