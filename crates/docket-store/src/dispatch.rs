//! The invocation surface presented to the routing harness.
//!
//! The harness hands over a function name and an ordered list of string
//! arguments. Rather than string-matching inside each handler, the name is
//! resolved up front into the closed [`Invocation`] enum, so an unhandled
//! operation is a compile-time gap instead of a runtime fallthrough. Arity
//! is validated during parsing, before any backend access.
//!
//! Legacy contract function names remain valid as aliases: `upload` for
//! create, `download` for read, `show`/`find` for describe.

use docket_ledger::StateStore;

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;

/// Closed set of operations accepted from the invocation harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Store a new record; fails if the key is taken.
    Create {
        key: String,
        tag: String,
        payload: Vec<u8>,
    },
    /// Return a record's payload bytes.
    Read { key: String },
    /// Return every `{Key, Tag}` pair in key order.
    List,
    /// Return one record's `{Key, Tag}` pair.
    Describe { key: String },
}

impl Invocation {
    /// Resolve a function name and argument list into an invocation.
    ///
    /// Fails with [`StoreError::UnknownFunction`] for names outside the
    /// closed set and [`StoreError::Arity`] for wrong argument counts; both
    /// are detected here, before any backend call.
    pub fn parse(function: &str, args: &[String]) -> StoreResult<Self> {
        match function {
            "create" | "upload" => {
                expect_args(function, args, 3)?;
                Ok(Self::Create {
                    key: args[0].clone(),
                    tag: args[1].clone(),
                    payload: args[2].clone().into_bytes(),
                })
            }
            "read" | "download" => {
                expect_args(function, args, 1)?;
                Ok(Self::Read {
                    key: args[0].clone(),
                })
            }
            "list" => {
                expect_args(function, args, 0)?;
                Ok(Self::List)
            }
            "describe" | "show" | "find" => {
                expect_args(function, args, 1)?;
                Ok(Self::Describe {
                    key: args[0].clone(),
                })
            }
            other => Err(StoreError::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> StoreResult<()> {
    if args.len() != expected {
        return Err(StoreError::Arity {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

impl<S: StateStore> RecordStore<S> {
    /// Execute an invocation and produce its success payload.
    ///
    /// Payload shapes per operation: create returns empty bytes, read the
    /// raw record payload, list a JSON array of `{Key, Tag}` objects in scan
    /// order, describe a single JSON `{Key, Tag}` object.
    pub fn execute(&self, invocation: Invocation) -> StoreResult<Vec<u8>> {
        match invocation {
            Invocation::Create { key, tag, payload } => {
                self.create(&key, &tag, &payload)?;
                Ok(Vec::new())
            }
            Invocation::Read { key } => self.read(&key),
            Invocation::List => {
                let results = self.list_keys()?;
                serde_json::to_vec(&results).map_err(|e| StoreError::Serialization(e.to_string()))
            }
            Invocation::Describe { key } => {
                let result = self.describe(&key)?;
                serde_json::to_vec(&result).map_err(|e| StoreError::Serialization(e.to_string()))
            }
        }
    }

    /// Parse and execute in one step: the full harness-facing surface.
    pub fn invoke(&self, function: &str, args: &[String]) -> StoreResult<Vec<u8>> {
        self.execute(Invocation::parse(function, args)?)
    }
}
