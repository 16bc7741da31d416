//! Ordered key/value ledger boundary for docket.
//!
//! The record store above this crate treats durable state as an external
//! ordered key/value service: point `get`, point `put`, and an ordered range
//! scan over a lexicographic key interval. In production that service is a
//! replicated ledger; this crate defines the boundary and ships two local
//! backends.
//!
//! # Backends
//!
//! All backends implement the [`StateStore`] trait:
//!
//! - [`InMemoryStateStore`] -- `BTreeMap`-based store for tests and embedding
//! - [`FileStateStore`] -- the same map persisted as a JSON file, for CLI use
//!
//! # Design Rules
//!
//! 1. Keys are ordered lexicographically on their byte representation.
//! 2. Absence is `Ok(None)`, never an error.
//! 3. Concurrent writes to the same key are serialized by the backend.
//! 4. A range scan is a resource: dropping the cursor releases it, on every
//!    exit path.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{LedgerError, Result};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::{StateEntry, StateScan, StateStore};
