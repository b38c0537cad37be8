//! Application state and view model computation.
//!
//! [`AppState`] is the single composition root: it owns one instance of every
//! store plus the transient UI state (current screen, criteria, detail
//! selection). Consumers receive it by reference; nothing is looked up from
//! ambient globals.
//!
//! # Derived State
//!
//! Search results are cached in `search_results` and recomputed by
//! [`AppState::apply_search_filter`] whenever the search criteria change. The
//! favorites and notes views are cheap and are projected on demand.
//!
//! # Example
//!
//! ```rust
//! use filmbox::app::AppState;
//! use filmbox::storage::{MemoryStore, NOTES_KEY};
//! use filmbox::{Catalog, Film, NotesStore};
//!
//! let catalog = Catalog::new(vec![Film::new(1, "Heat", "Crime", 1995, 8.3)])?;
//! let notes = NotesStore::load(MemoryStore::default(), NOTES_KEY);
//! let state = AppState::new(catalog, notes);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.title, "Popular Films (1)");
//! # Ok::<(), filmbox::FilmBoxError>(())
//! ```

use super::modes::ViewMode;
use super::selection::DetailCoordinator;
use crate::catalog::Catalog;
use crate::domain::{FavoriteEntry, Film, FilmNote};
use crate::query::{self, FavoritesCriteria, NoteStats, NotesCriteria, SearchCriteria};
use crate::storage::KeyValueStore;
use crate::store::{FavoritesStore, NotesStore};
use crate::ui::viewmodel::{Content, DetailPanel, EmptyState, FilmCard, HeaderInfo, UIViewModel};

/// Central application state container.
#[derive(Debug)]
pub struct AppState<S> {
    /// Read-only film catalog.
    pub catalog: Catalog,

    /// Favorite films for this process lifetime.
    pub favorites: FavoritesStore,

    /// Persisted notes.
    pub notes: NotesStore<S>,

    /// Detail surface selection.
    pub detail: DetailCoordinator,

    /// Screen currently displayed.
    pub view_mode: ViewMode,

    /// Search screen criteria.
    ///
    /// Call `apply_search_filter()` after changing them directly.
    pub search: SearchCriteria,

    /// Catalog films matching `search`, in catalog order.
    pub search_results: Vec<Film>,

    /// Favorites screen genre filter and sort order.
    pub favorites_criteria: FavoritesCriteria,

    /// Notes screen query, tag filter and sort order.
    pub notes_criteria: NotesCriteria,
}

impl<S: KeyValueStore> AppState<S> {
    /// Creates the state on the home screen with nothing selected.
    #[must_use]
    pub fn new(catalog: Catalog, notes: NotesStore<S>) -> Self {
        let mut state = Self {
            catalog,
            favorites: FavoritesStore::new(),
            notes,
            detail: DetailCoordinator::new(),
            view_mode: ViewMode::Home,
            search: SearchCriteria::default(),
            search_results: Vec::new(),
            favorites_criteria: FavoritesCriteria::default(),
            notes_criteria: NotesCriteria::default(),
        };
        state.apply_search_filter();
        state
    }

    /// Recomputes `search_results` from the catalog and `search`.
    pub fn apply_search_filter(&mut self) {
        self.search_results = query::search::filter(self.catalog.films(), &self.search);
    }

    /// Looks up a film by id, in the catalog first, then among favorites.
    #[must_use]
    pub fn find_film(&self, id: i64) -> Option<&Film> {
        self.catalog
            .get(id)
            .or_else(|| self.favorites.get(id).map(|entry| &entry.film))
    }

    /// Favorites filtered and sorted by `favorites_criteria`.
    #[must_use]
    pub fn favorites_view(&self) -> Vec<FavoriteEntry> {
        query::favorites::view(self.favorites.list(), &self.favorites_criteria)
    }

    /// Notes filtered and sorted by `notes_criteria`.
    #[must_use]
    pub fn notes_view(&self) -> Vec<FilmNote> {
        query::notes::view(self.notes.list(), &self.notes_criteria)
    }

    /// Summary figures over all notes, ignoring the current filter.
    #[must_use]
    pub fn note_stats(&self) -> NoteStats {
        query::notes::stats(self.notes.list())
    }

    /// Builds the render snapshot for the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", view_mode = ?self.view_mode).entered();

        let (content, count, empty_state) = match self.view_mode {
            ViewMode::Home => {
                let cards = self.film_cards(self.catalog.films());
                let empty = cards.is_empty().then(|| EmptyState {
                    message: "The catalog is empty".to_string(),
                    subtitle: "No films were supplied to browse.".to_string(),
                });
                let count = cards.len();
                (
                    Content::Films {
                        cards,
                        genre_options: self.catalog.genres(),
                    },
                    count,
                    empty,
                )
            }
            ViewMode::Search => {
                let cards = self.film_cards(&self.search_results);
                let empty = cards.is_empty().then(|| EmptyState {
                    message: "No films matched your search".to_string(),
                    subtitle: "Try a shorter title or fewer filters.".to_string(),
                });
                let count = cards.len();
                (
                    Content::Films {
                        cards,
                        genre_options: self.catalog.genres(),
                    },
                    count,
                    empty,
                )
            }
            ViewMode::Favorites => {
                let cards = self.film_cards(&self.favorites_view());
                let empty = if self.favorites.is_empty() {
                    Some(EmptyState {
                        message: "No favorites yet".to_string(),
                        subtitle: "Open a film and mark it with the heart to keep it here.".to_string(),
                    })
                } else if cards.is_empty() {
                    Some(EmptyState {
                        message: "No favorites in this genre".to_string(),
                        subtitle: "Pick another genre or show all.".to_string(),
                    })
                } else {
                    None
                };
                let count = cards.len();
                (
                    Content::Films {
                        cards,
                        genre_options: query::favorites::genre_options(self.favorites.list()),
                    },
                    count,
                    empty,
                )
            }
            ViewMode::Notes => {
                let notes = self.notes_view();
                let empty = if self.notes.is_empty() {
                    Some(EmptyState {
                        message: "No notes yet".to_string(),
                        subtitle: "Save your thoughts about the films you watch.".to_string(),
                    })
                } else if notes.is_empty() {
                    Some(EmptyState {
                        message: "No notes matched".to_string(),
                        subtitle: "Change the search text or tag.".to_string(),
                    })
                } else {
                    None
                };
                let count = notes.len();
                let stats = (!self.notes.is_empty()).then(|| self.note_stats());
                (
                    Content::Notes {
                        notes,
                        tag_options: query::notes::all_tags(self.notes.list()),
                        stats,
                    },
                    count,
                    empty,
                )
            }
        };

        let detail = self.detail.current().map(|film| DetailPanel {
            film: film.clone(),
            is_favorite: self.favorites.contains(film.id),
        });

        UIViewModel {
            header: HeaderInfo {
                title: format!("{} ({count})", self.view_mode.title()),
            },
            content,
            empty_state,
            detail,
        }
    }

    fn film_cards<T: crate::domain::Listing>(&self, items: &[T]) -> Vec<FilmCard> {
        items
            .iter()
            .map(|item| FilmCard::new(item.film(), self.favorites.contains(item.film().id), item.date_added()))
            .collect()
    }
}
