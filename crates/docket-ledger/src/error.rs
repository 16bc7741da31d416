//! Error types for ledger state operations.

use thiserror::Error;

/// Errors from the underlying ordered key/value state store.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// I/O failure in a file-backed store.
    #[error("ledger io error: {0}")]
    Io(#[from] std::io::Error),

    /// A lock guarding in-process state was poisoned by a panicking writer.
    #[error("ledger state lock poisoned: {0}")]
    Poisoned(String),

    /// A range scan failed partway through iteration.
    #[error("ledger scan failed: {0}")]
    Scan(String),

    /// Serialization or deserialization of the persisted state image failed.
    #[error("ledger serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
