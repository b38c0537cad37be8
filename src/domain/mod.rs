//! Domain layer for FilmBox.
//!
//! Core types shared by the stores, the filter/sort engine and the application
//! layer, free of any storage or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`film`]: Catalog films, favorite entries and the [`Listing`] abstraction
//! - [`note`]: Film notes, drafts, patches and ratings
//!
//! # Examples
//!
//! ```
//! use filmbox::domain::{FavoriteEntry, Film, Listing};
//!
//! let entry = FavoriteEntry::new(Film::new(1, "Heat", "Crime", 1995, 8.3));
//! assert!(entry.date_added().is_some());
//! ```

pub mod error;
pub mod film;
pub mod note;

pub use error::{FilmBoxError, Result};
pub use film::{FavoriteEntry, Film, Listing};
pub use note::{toggle_tag, FilmNote, NoteDraft, NotePatch, NoteRating, COMMON_TAGS};
