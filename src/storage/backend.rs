//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the durable local key-value
//! storage the notes collection is persisted into. Values are opaque strings;
//! callers own their serialization format.
//!
//! # Design Philosophy
//!
//! The trait mirrors the small surface of browser-style local storage (get, set,
//! remove by string key) rather than a generic database API. Stores above it
//! rewrite whole values; there are no partial writes.

use crate::domain::error::Result;

/// Abstraction over durable key-value storage backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): process-lifetime map
///
/// # Examples
///
/// ```
/// use filmbox::storage::{KeyValueStore, MemoryStore};
///
/// let mut storage = MemoryStore::default();
/// storage.set("filmbox_notes", "[]")?;
/// assert_eq!(storage.get("filmbox_notes")?.as_deref(), Some("[]"));
/// # Ok::<(), filmbox::FilmBoxError>(())
/// ```
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is complete when this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
