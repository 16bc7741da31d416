//! Key-addressed record store for docket.
//!
//! A thin façade over an injected ordered key/value backend (see
//! `docket-ledger`). A record is a `{tag, data}` pair stored serialized
//! under one caller-chosen string key; the store's whole job is request
//! validation, existence checking, and encode/decode.
//!
//! # Operations
//!
//! - [`RecordStore::create`] -- store a new record, never overwriting
//! - [`RecordStore::read`] -- return a record's payload bytes
//! - [`RecordStore::describe`] -- return the `{Key, Tag}` projection
//! - [`RecordStore::list_keys`] -- all projections, in key order
//!
//! The harness-facing surface ([`Invocation`], [`RecordStore::invoke`])
//! resolves contract function names and their legacy aliases, with arity
//! checked before any backend access.
//!
//! # Design Rules
//!
//! 1. Records are immutable once written; there is no update or delete.
//! 2. Create checks existence first and never overwrites; concurrent
//!    same-key writes are serialized by the backend contract.
//! 3. Decode lenience is the named [`DecodePolicy`], not an accident:
//!    lenient reads a malformed value as an empty record, strict fails.
//! 4. Backend failures surface immediately; nothing retries.

pub mod dispatch;
pub mod error;
pub mod record;
pub mod store;

// Re-export primary types at crate root for ergonomic imports.
pub use dispatch::Invocation;
pub use error::{StoreError, StoreResult};
pub use record::{DecodePolicy, QueryResult, Record};
pub use store::RecordStore;
