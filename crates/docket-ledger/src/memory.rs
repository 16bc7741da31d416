//! In-memory state store for testing and ephemeral use.
//!
//! [`InMemoryStateStore`] keeps all state in a `BTreeMap` protected by a
//! `RwLock`. The map's key ordering gives range scans their lexicographic
//! order for free. Data is lost when the store is dropped.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use crate::error::{LedgerError, Result};
use crate::traits::{StateEntry, StateScan, StateStore};

/// An in-memory implementation of [`StateStore`].
pub struct InMemoryStateStore {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty state store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.state.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.state.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStateStore")
            .field("key_count", &self.len())
            .finish()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let state = self
            .state
            .read()
            .map_err(|e| LedgerError::Poisoned(e.to_string()))?;
        Ok(state.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| LedgerError::Poisoned(e.to_string()))?;
        state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<Box<dyn StateScan + '_>> {
        let state = self
            .state
            .read()
            .map_err(|e| LedgerError::Poisoned(e.to_string()))?;
        Ok(Box::new(snapshot_scan(&state, start, end)))
    }
}

/// Scan backed by a snapshot of the matching interval.
///
/// The snapshot is taken under the read lock, so the cursor never blocks
/// writers and needs no cleanup beyond its own drop.
pub(crate) struct SnapshotScan {
    entries: std::vec::IntoIter<StateEntry>,
}

impl StateScan for SnapshotScan {
    fn next_entry(&mut self) -> Result<Option<StateEntry>> {
        Ok(self.entries.next())
    }
}

/// Materialize `[start, end)` of an ordered map into a [`SnapshotScan`].
pub(crate) fn snapshot_scan(
    state: &BTreeMap<String, Vec<u8>>,
    start: &str,
    end: &str,
) -> SnapshotScan {
    let lower: Bound<&str> = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let upper: Bound<&str> = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };
    let entries: Vec<StateEntry> = state
        .range::<str, _>((lower, upper))
        .map(|(key, value)| StateEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();
    SnapshotScan {
        entries: entries.into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut scan: Box<dyn StateScan + '_>) -> Vec<(String, Vec<u8>)> {
        let mut out = Vec::new();
        while let Some(entry) = scan.next_entry().unwrap() {
            out.push((entry.key, entry.value));
        }
        out
    }

    // -----------------------------------------------------------------------
    // Point operations
    // -----------------------------------------------------------------------

    #[test]
    fn put_then_get() {
        let store = InMemoryStateStore::new();
        store.put("k1", b"v1").unwrap();
        assert_eq!(store.get("k1").unwrap(), Some(b"v1".to_vec()));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryStateStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_replaces_existing_value() {
        let store = InMemoryStateStore::new();
        store.put("k", b"old").unwrap();
        store.put("k", b"new").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Range scans
    // -----------------------------------------------------------------------

    #[test]
    fn full_scan_is_key_ordered() {
        let store = InMemoryStateStore::new();
        store.put("b", b"2").unwrap();
        store.put("a", b"1").unwrap();
        store.put("c", b"3").unwrap();

        let entries = collect(store.scan_range("", "").unwrap());
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn bounded_scan_is_inclusive_exclusive() {
        let store = InMemoryStateStore::new();
        for key in ["a", "b", "c", "d"] {
            store.put(key, key.as_bytes()).unwrap();
        }

        let entries = collect(store.scan_range("b", "d").unwrap());
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn scan_on_empty_store_yields_nothing() {
        let store = InMemoryStateStore::new();
        let entries = collect(store.scan_range("", "").unwrap());
        assert!(entries.is_empty());
    }

    #[test]
    fn scan_snapshot_ignores_later_writes() {
        let store = InMemoryStateStore::new();
        store.put("a", b"1").unwrap();
        let scan = store.scan_range("", "").unwrap();
        store.put("b", b"2").unwrap();
        assert_eq!(collect(scan).len(), 1);
    }

    // -----------------------------------------------------------------------
    // Concurrent access
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStateStore::new());
        store.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    assert_eq!(store.get("shared").unwrap(), Some(b"data".to_vec()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
