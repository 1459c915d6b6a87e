//! The key-value store port.

use crate::StoreError;
use std::sync::Arc;

/// A flat string-to-string store.
///
/// Writes are last-write-wins. Implementations must be `Send + Sync` so a
/// handle can be moved into the deferred tasks that update game state.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Shared handle passed into component constructors.
pub type SharedStore = Arc<dyn KeyValueStore>;
