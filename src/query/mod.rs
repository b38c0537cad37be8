//! Filter/sort engine.
//!
//! Pure, stateless projections from a source list and a set of criteria to an
//! ordered view. The same functions serve bare catalog films and favorite
//! entries through the [`Listing`](crate::domain::Listing) trait. All sorts are
//! stable, so repeated runs over identical input give identical output.
//!
//! # Modules
//!
//! - [`collation`]: locale-aware title ordering
//! - [`search`]: title/genre/year/rating filtering for the search view
//! - [`favorites`]: genre filter and sort keys for the favorites view
//! - [`notes`]: text/tag filtering, sorting and statistics for notes

pub mod collation;
pub mod favorites;
pub mod notes;
pub mod search;

pub use favorites::{FavoritesCriteria, GenreFilter, SortKey};
pub use notes::{NoteSortKey, NoteStats, NotesCriteria, TagFilter};
pub use search::SearchCriteria;
