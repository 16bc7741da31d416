//! File-backed state store.
//!
//! [`FileStateStore`] persists the whole keyspace as a single JSON document
//! and rewrites it atomically (write to a sibling temp file, then rename) on
//! every `put`. Suited for CLI use and small-to-moderate record counts; it
//! is not a storage engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::memory::snapshot_scan;
use crate::traits::{StateScan, StateStore};

/// A [`StateStore`] persisted to a JSON file on disk.
pub struct FileStateStore {
    path: PathBuf,
    state: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl FileStateStore {
    /// Open the store at `path`, loading the existing state image if the
    /// file exists and starting empty otherwise.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| LedgerError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.state.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.state.read().expect("lock poisoned").is_empty()
    }

    /// Rewrite the on-disk image from `state`. Callers hold the write lock.
    fn persist(&self, state: &BTreeMap<String, Vec<u8>>) -> Result<()> {
        let bytes = serde_json::to_vec(state)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = state.len(), "state image persisted");
        Ok(())
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .field("key_count", &self.len())
            .finish()
    }
}

impl StateStore for FileStateStore {
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
        self.persist(&state)
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<Box<dyn StateScan + '_>> {
        let state = self
            .state
            .read()
            .map_err(|e| LedgerError::Poisoned(e.to_string()))?;
        Ok(Box::new(snapshot_scan(&state, start, end)))
    }
}
