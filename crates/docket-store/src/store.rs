//! The record store façade over an ordered key/value backend.

use docket_ledger::{StateScan, StateStore};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::record::{DecodePolicy, QueryResult, Record};

/// Key-addressed record store.
///
/// Stateless apart from the injected backend: every operation is a short
/// bounded sequence of at most one backend read and one backend write, with
/// no retries and no background work. Create-once is enforced by an
/// existence check before the write; the backend's contract of serializing
/// same-key writes covers the gap between the two calls.
pub struct RecordStore<S> {
    state: S,
    decode: DecodePolicy,
}

impl<S: StateStore> RecordStore<S> {
    /// Create a store over `state` with the default (lenient) decode policy.
    pub fn new(state: S) -> Self {
        Self::with_policy(state, DecodePolicy::default())
    }

    /// Create a store over `state` with an explicit decode policy.
    pub fn with_policy(state: S, decode: DecodePolicy) -> Self {
        Self { state, decode }
    }

    /// The decode policy this store applies to stored values.
    pub fn decode_policy(&self) -> DecodePolicy {
        self.decode
    }

    /// Store a new record under `key`.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if `key` already holds a
    /// record; never overwrites.
    pub fn create(&self, key: &str, tag: &str, payload: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let existing = self.state.get(key).map_err(|e| StoreError::Backend {
            key: key.to_string(),
            source: e,
        })?;
        if existing.as_deref().is_some_and(|v| !v.is_empty()) {
            return Err(StoreError::AlreadyExists {
                key: key.to_string(),
            });
        }

        let bytes = Record::new(tag, payload.to_vec()).to_bytes()?;
        self.state.put(key, &bytes).map_err(|e| StoreError::Backend {
            key: key.to_string(),
            source: e,
        })?;
        debug!(key, tag, payload_len = payload.len(), "record created");
        Ok(())
    }

    /// Return the payload bytes of the record at `key`.
    ///
    /// The tag is not part of this response; use [`RecordStore::describe`]
    /// for metadata.
    pub fn read(&self, key: &str) -> StoreResult<Vec<u8>> {
        let record = self.load(key)?;
        Ok(record.data)
    }

    /// Return the `{Key, Tag}` projection of the record at `key`.
    pub fn describe(&self, key: &str) -> StoreResult<QueryResult> {
        let record = self.load(key)?;
        Ok(QueryResult {
            key: key.to_string(),
            tag: record.tag,
        })
    }

    /// Scan the entire keyspace and return one `{Key, Tag}` projection per
    /// record, in the backend's lexicographic key order.
    ///
    /// The result is fully materialized; a backend error mid-scan aborts the
    /// whole call and discards already-scanned entries. The scan cursor is
    /// released on every exit path when it drops.
    pub fn list_keys(&self) -> StoreResult<Vec<QueryResult>> {
        let mut scan = self.state.scan_range("", "").map_err(StoreError::Scan)?;
        let mut results = Vec::new();
        while let Some(entry) = scan.next_entry().map_err(StoreError::Scan)? {
            let record = self.decode_stored(&entry.key, &entry.value)?;
            results.push(QueryResult {
                key: entry.key,
                tag: record.tag,
            });
        }
        Ok(results)
    }

    /// Point lookup plus decode; absent or empty values are `NotFound`.
    fn load(&self, key: &str) -> StoreResult<Record> {
        let bytes = self
            .state
            .get(key)
            .map_err(|e| StoreError::Backend {
                key: key.to_string(),
                source: e,
            })?
            .filter(|v| !v.is_empty())
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })?;
        self.decode_stored(key, &bytes)
    }

    /// Decode a stored value under the configured [`DecodePolicy`].
    fn decode_stored(&self, key: &str, bytes: &[u8]) -> StoreResult<Record> {
        match Record::from_bytes(bytes) {
            Ok(record) => Ok(record),
            Err(e) => match self.decode {
                DecodePolicy::Strict => Err(StoreError::Malformed {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
                DecodePolicy::Lenient => {
                    warn!(key, error = %e, "malformed stored record, reading as empty");
                    Ok(Record::default())
                }
            },
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for RecordStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("state", &self.state)
            .field("decode", &self.decode)
            .finish()
    }
}
