//! JSON file-based key-value backend.
//!
//! This module provides a human-readable storage implementation: one JSON object
//! mapping keys to string values. It uses atomic file writes (write-to-temp +
//! rename) so a crash mid-write never leaves a truncated file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the whole file is loaded into memory on open
//! - **Write**: O(n) - every change rewrites the entire file
//! - **Best for**: a handful of keys with values of modest size

use crate::domain::error::{FilmBoxError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "filmbox_notes": "[{\"id\":\"1718000000000\", ...}]"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The entire map is kept in memory and persisted on every modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is meant to be owned by the single
/// application state that mutates it.
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store. A file that exists but cannot be
    /// parsed also starts an empty store: the damage is logged and the file is
    /// replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filmbox::storage::JsonFileStore;
    ///
    /// let storage = JsonFileStore::open("/tmp/filmbox/storage.json")?;
    /// # Ok::<(), filmbox::FilmBoxError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON storage");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage opened");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read(path)?;
        match serde_json::from_slice::<StorageData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded storage data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is malformed, starting empty");
                Ok(StorageData::default())
            }
        }
    }

    /// Writes to a sibling temporary file, then renames it over the target.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FilmBoxError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!("storage saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, bytes = value.len()).entered();

        let previous = self.data.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_to_file() {
            match previous {
                Some(old) => self.data.entries.insert(key.to_string(), old),
                None => self.data.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        let Some(previous) = self.data.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.save_to_file() {
            self.data.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = JsonFileStore::open(&path).unwrap();
        storage.set("filmbox_notes", "[1,2]").unwrap();
        drop(storage);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("filmbox_notes").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = JsonFileStore::open(&path).unwrap();
        assert_eq!(storage.get("filmbox_notes").unwrap(), None);
    }

    #[test]
    fn non_utf8_file_opens_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

        let mut storage = JsonFileStore::open(&path).unwrap();
        assert_eq!(storage.get("filmbox_notes").unwrap(), None);

        storage.set("filmbox_notes", "[]").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("filmbox_notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_deletes_and_tolerates_absent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = JsonFileStore::open(&path).unwrap();
        storage.set("a", "1").unwrap();
        storage.remove("a").unwrap();
        storage.remove("missing").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = JsonFileStore::open(&path).unwrap();
        storage.set("a", "1").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
