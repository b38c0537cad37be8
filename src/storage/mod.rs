//! Storage layer: durable local key-value storage.
//!
//! The notes store serializes its whole collection into a single value under a
//! fixed key and writes it through one of these backends after every mutation.
//! Favorites are deliberately not persisted.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait abstraction
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-process implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Default key the notes collection is stored under.
pub const NOTES_KEY: &str = "filmbox_notes";
