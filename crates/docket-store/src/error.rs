//! Error types for record store operations.

use docket_ledger::LedgerError;
use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrong argument count for an invocation; detected before any backend
    /// access.
    #[error("wrong number of arguments for {function}: expected {expected}, got {actual}")]
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// The invocation named a function outside the contract.
    #[error("invalid function name: {0}")]
    UnknownFunction(String),

    /// A record already exists under this key; create never overwrites.
    #[error("record already exists: {key}")]
    AlreadyExists { key: String },

    /// No record exists under this key.
    #[error("record not found: {key}")]
    NotFound { key: String },

    /// Keys must be non-empty.
    #[error("record key must not be empty")]
    EmptyKey,

    /// The stored value could not be decoded (strict decode policy only).
    #[error("malformed record at {key}: {reason}")]
    Malformed { key: String, reason: String },

    /// Encoding a record or response payload failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend failed during a point operation on `key`.
    #[error("backend failure on key {key}: {source}")]
    Backend {
        key: String,
        #[source]
        source: LedgerError,
    },

    /// The backend failed while scanning the keyspace.
    #[error("backend scan failure: {0}")]
    Scan(#[source] LedgerError),
}

/// Result alias for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;
