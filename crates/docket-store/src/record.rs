//! The persisted record type and its read-only projection.
//!
//! A [`Record`] is stored serialized as one JSON value under one key. Its
//! at-rest field names are lowercase (`tag`, `data`). The [`QueryResult`]
//! projection returned by list/describe uses capitalized wire names (`Key`,
//! `Tag`); existing callers depend on that asymmetry, so both shapes are
//! pinned here with serde attributes.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// The persisted entity: a short metadata tag plus an opaque payload.
///
/// Records are immutable once written; the store offers no update or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short label used as lightweight metadata for list/describe.
    pub tag: String,
    /// Opaque payload bytes; may be empty.
    pub data: Vec<u8>,
}

impl Record {
    /// Build a record from its parts.
    pub fn new(tag: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            tag: tag.into(),
            data: data.into(),
        }
    }

    /// Serialize to the at-rest JSON form.
    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Decode the at-rest JSON form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Read-only `{Key, Tag}` projection of a stored record.
///
/// Constructed on demand for list/describe responses, never persisted. Lets
/// callers probe metadata without transferring payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The key the record is stored under.
    #[serde(rename = "Key")]
    pub key: String,
    /// The record's metadata tag.
    #[serde(rename = "Tag")]
    pub tag: String,
}

/// How the store treats stored values that fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// A malformed stored value reads as an empty-tag, empty-data record.
    #[default]
    Lenient,
    /// A malformed stored value is a [`StoreError::Malformed`] failure.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_field_names_are_lowercase() {
        let record = Record::new("invoice", b"hello".to_vec());
        let value: serde_json::Value = serde_json::from_slice(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(value["tag"], "invoice");
        assert!(value.get("data").is_some());
        assert!(value.get("Tag").is_none());
    }

    #[test]
    fn projection_field_names_are_capitalized() {
        let result = QueryResult {
            key: "doc1".into(),
            tag: "invoice".into(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Key"], "doc1");
        assert_eq!(value["Tag"], "invoice");
        assert!(value.get("key").is_none());
    }

    #[test]
    fn record_round_trips_through_bytes() {
        let record = Record::new("t", vec![0u8, 1, 255]);
        let decoded = Record::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn empty_payload_is_valid() {
        let record = Record::new("t", Vec::new());
        let decoded = Record::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert!(decoded.data.is_empty());
    }

    #[test]
    fn malformed_bytes_fail_to_decode() {
        assert!(Record::from_bytes(b"not json").is_err());
        assert!(Record::from_bytes(b"{\"unrelated\":1}").is_err());
    }
}
