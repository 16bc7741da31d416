//! The [`StateStore`] trait defining the ordered key/value boundary.
//!
//! Any backend (in-memory, file, a real ledger peer) implements this trait to
//! provide durable state to the record store layered on top of it.

use crate::error::Result;

/// A single key/value pair yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// The key the value is stored under.
    pub key: String,
    /// The stored value bytes.
    pub value: Vec<u8>,
}

/// Cursor over an ordered interval of the keyspace.
///
/// Entries are yielded in lexicographic key order. Dropping the cursor
/// releases whatever backend resources the scan holds, whether iteration
/// completed, failed, or was abandoned early.
pub trait StateScan {
    /// Advance the cursor.
    ///
    /// Returns `Ok(None)` once the interval is exhausted, `Err` if the
    /// backend fails mid-iteration.
    fn next_entry(&mut self) -> Result<Option<StateEntry>>;
}

/// Ordered key/value state backend.
///
/// All implementations must satisfy these invariants:
/// - Keys are ordered lexicographically on their byte representation.
/// - `get` returns `Ok(None)` for absent keys; errors are real backend
///   failures, never absence.
/// - Concurrent `put`s to the same key are serialized by the backend. The
///   record store above performs check-then-act sequences and relies on
///   this contract rather than adding its own locking.
/// - All I/O errors are propagated, never silently ignored.
pub trait StateStore: Send + Sync {
    /// Point lookup. Returns `Ok(None)` if the key has no stored value.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Open an ordered scan over `[start, end)`.
    ///
    /// An empty `start` means from the beginning of the keyspace; an empty
    /// `end` means through the last key. `scan_range("", "")` covers the
    /// entire keyspace.
    fn scan_range(&self, start: &str, end: &str) -> Result<Box<dyn StateScan + '_>>;
}
