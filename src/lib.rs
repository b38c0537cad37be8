//! FilmBox: a personal film catalog with favorites, notes and search.
//!
//! FilmBox keeps the state behind a small film-browsing application:
//! - A read-only catalog of films loaded from JSON
//! - A favorites collection with add/remove/toggle semantics
//! - Free-text film notes with ratings and tags, persisted across restarts
//! - Pure filter/sort projections for the search, favorites and notes screens
//! - A detail surface coordinating selection with favorites and notes
//!
//! The crate draws nothing; a view layer renders the
//! [`UIViewModel`](ui::UIViewModel) snapshots it produces and feeds user
//! intents back as [`Event`]s.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View layer (not part of this crate)                │  ← Rendering, input
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ▲ UIViewModel
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Detail coordinator                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Stores        │   │ Query engine  │   │ Catalog       │
//! │ (store/)      │   │ (query/)      │   │ (catalog.rs)  │
//! │ - Favorites   │   │ - Search      │   │ - Film list   │
//! │ - Notes       │   │ - Favorites   │   │ - Genres      │
//! │               │   │ - Notes/stats │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/)                                 │
//! │  - KeyValueStore trait                              │
//! │  - JSON file backend, in-memory backend             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Observability (observability/)│
//! │  - Film, FavoriteEntry, FilmNote, errors            │
//! │  - OpenTelemetry tracing to a local file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state, events and the detail coordinator
//! - [`catalog`]: The read-only film catalog
//! - [`domain`]: Core domain types (films, notes, errors)
//! - [`query`]: Pure filtering and sorting of films, favorites and notes
//! - [`storage`]: Durable string key-value storage
//! - [`store`]: Favorites and notes stores
//! - [`ui`]: View model types handed to the view layer
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```toml
//! # filmbox.toml
//! data_dir = "/home/me/.local/share/filmbox"
//! catalog_path = "/home/me/.local/share/filmbox/films.json"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use filmbox::{handle_event, initialize, Config, Event};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: dir.path().to_path_buf(),
//!     ..Config::default()
//! };
//!
//! let mut state = initialize(&config)?;
//! assert!(state.catalog.is_empty());
//!
//! let rerender = handle_event(&mut state, &Event::SearchTitle("heat".to_string()))?;
//! assert!(rerender);
//! # Ok::<(), filmbox::FilmBoxError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Favorites Are Session-Scoped
//!
//! Notes survive restarts through the key-value store; favorites live only as
//! long as the [`AppState`] that owns them.
//!
//! ## Persist, Then Commit
//!
//! Note mutations write the whole collection under one key before updating
//! memory. A failed write leaves the in-memory notes untouched.
//!
//! ## Lenient Loading
//!
//! A missing, unreadable or malformed notes value loads as an empty
//! collection instead of failing startup.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod query;
pub mod storage;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, AppState, DetailCoordinator, DetailState, Event, ViewMode};
pub use catalog::Catalog;
pub use domain::{FavoriteEntry, Film, FilmBoxError, FilmNote, NoteDraft, NotePatch, NoteRating, Result};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{FavoritesStore, NotesStore};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the key-value store inside `Config::data_dir`.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Runtime configuration.
///
/// Every field has a default, so a TOML file or map only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `storage.json` and the trace file.
    ///
    /// Default: `.filmbox` relative to the working directory.
    pub data_dir: PathBuf,

    /// JSON file with the film catalog (an array of films).
    ///
    /// When unset the catalog is empty.
    pub catalog_path: Option<PathBuf>,

    /// Storage key under which notes are persisted. Default: `"filmbox_notes"`.
    pub notes_key: String,

    /// Filter directive for tracing: `trace`, `debug`, `info`, `warn`,
    /// `error`, or any `EnvFilter` string. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".filmbox"),
            catalog_path: None,
            notes_key: storage::NOTES_KEY.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from string key/value pairs.
    ///
    /// Unknown keys are ignored and blank values fall back to the defaults.
    ///
    /// # Recognized Keys
    ///
    /// - `data_dir`
    /// - `catalog_path`
    /// - `notes_key`
    /// - `trace_level`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use filmbox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/filmbox".to_string());
    /// map.insert("notes_key".to_string(), " ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir.to_str(), Some("/tmp/filmbox"));
    /// assert_eq!(config.notes_key, "filmbox_notes");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            data_dir: value("data_dir").map_or(defaults.data_dir, PathBuf::from),
            catalog_path: value("catalog_path").map(PathBuf::from),
            notes_key: value("notes_key").unwrap_or(defaults.notes_key),
            trace_level: value("trace_level"),
        }
    }

    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FilmBoxError::Io` if the file cannot be read and
    /// `FilmBoxError::Config` if it is not valid TOML for this structure.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| FilmBoxError::Config(format!("{}: {e}", path.display())))
    }

    /// Location of the key-value store file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }
}

/// Builds the application state from configuration.
///
/// Loads the catalog (empty when `catalog_path` is unset), opens the JSON
/// key-value store under `data_dir` and loads the persisted notes. Tracing is
/// not initialized here; call [`observability::init_tracing`] first if it is
/// wanted.
///
/// # Errors
///
/// Fails when the catalog file cannot be read or parsed, or when the data
/// directory cannot be created. Malformed persisted notes are not an error.
pub fn initialize(config: &Config) -> Result<AppState<JsonFileStore>> {
    let _span = tracing::debug_span!("initialize", data_dir = %config.data_dir.display()).entered();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::default(),
    };
    let storage = JsonFileStore::open(config.storage_path())?;
    let notes = NotesStore::load(storage, config.notes_key.clone());

    tracing::debug!(films = catalog.len(), notes = notes.len(), "filmbox initialized");
    Ok(AppState::new(catalog, notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_applies_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn from_map_reads_all_keys() {
        let map: BTreeMap<String, String> = [
            ("data_dir", "/srv/filmbox"),
            ("catalog_path", "/srv/films.json"),
            ("notes_key", "my_notes"),
            ("trace_level", "debug"),
            ("unknown", "ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.data_dir, PathBuf::from("/srv/filmbox"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/films.json")));
        assert_eq!(config.notes_key, "my_notes");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn toml_file_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filmbox.toml");
        std::fs::write(&path, "trace_level = \"warn\"\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert_eq!(config.notes_key, storage::NOTES_KEY);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filmbox.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(Config::from_toml_file(&path), Err(FilmBoxError::Config(_))));
    }
}
