//! Durable key/value persistence
//!
//! This module defines the `KeyValueStore` trait that snippet state is
//! persisted through, along with an in-memory backend for tests and embedding
//! and a JSON file backend for standalone hosts.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use serde_json::Value;

use crate::error::StoreResult;

/// Key holding the snippet collection
pub const SNIPPETS_KEY: &str = "snipvault.snippets";

/// Key holding the id allocator's high-water mark
pub const LAST_ID_KEY: &str = "snipvault.lastId";

/// Abstraction over host-provided durable key/value storage
///
/// Values are whole JSON documents; there is no per-record storage.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Option<Value>;

    /// Replaces the value stored under `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be persisted. The previous
    /// value stays in place on failure.
    fn update(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Returns a human-readable description of where values live
    fn location(&self) -> String;
}
