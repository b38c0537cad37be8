//! Stores owning the user's mutable data.
//!
//! - [`favorites`]: process-lifetime favorites, one entry per film id
//! - [`notes`]: notes written through to a [`KeyValueStore`](crate::storage::KeyValueStore)
//!
//! Both are plain owned values. The application state constructs exactly one
//! of each and hands out references, so there is no ambient lookup that could
//! run before initialization.

pub mod favorites;
pub mod notes;

pub use favorites::FavoritesStore;
pub use notes::NotesStore;
