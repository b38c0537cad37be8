//! Event handling and state transition logic.
//!
//! This module turns discrete user intents into store operations and state
//! changes. Every event runs to completion before the next one is handled, so
//! no transition ever observes another half-applied.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → Store / Coordinator calls → re-render?
//!                                                                     │
//!                             View layer ◀── compute_viewmodel() ◀────┘
//! ```
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`
//! - **Detail surface**: `SelectFilm`, `CloseDetail`, `ToggleFavoriteInDetail`, `AddNoteFromDetail`
//! - **Cards**: `ToggleFavorite`, `RemoveFavorite`
//! - **Search criteria**: `SearchTitle`, `SearchGenre`, `SearchYear`, `SearchMinRating`, `ClearSearch`
//! - **Favorites criteria**: `FavoritesSort`, `FavoritesGenre`
//! - **Notes**: `SubmitNote`, `UpdateNote`, `DeleteNote`, `NotesQuery`, `NotesTag`, `NotesSort`
//!
//! # Example
//!
//! ```rust
//! use filmbox::app::{handle_event, AppState, Event};
//! use filmbox::storage::{MemoryStore, NOTES_KEY};
//! use filmbox::{Catalog, Film, NotesStore};
//!
//! let catalog = Catalog::new(vec![Film::new(1, "Heat", "Crime", 1995, 8.3)])?;
//! let mut state = AppState::new(catalog, NotesStore::load(MemoryStore::default(), NOTES_KEY));
//!
//! assert!(handle_event(&mut state, &Event::SelectFilm(1))?);
//! assert!(handle_event(&mut state, &Event::ToggleFavoriteInDetail)?);
//! assert!(state.favorites.contains(1));
//! # Ok::<(), filmbox::FilmBoxError>(())
//! ```

use super::modes::ViewMode;
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::{NoteDraft, NotePatch};
use crate::query::{GenreFilter, NoteSortKey, SortKey, TagFilter};
use crate::storage::KeyValueStore;

/// User intents delivered by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Switches to another screen.
    Navigate(ViewMode),

    /// Opens the detail surface for the film with this id.
    SelectFilm(i64),
    /// Hides the detail surface.
    CloseDetail,
    /// Favorite button on the detail surface.
    ToggleFavoriteInDetail,
    /// "Add note" button on the detail surface.
    AddNoteFromDetail,

    /// Heart icon on a film card.
    ToggleFavorite(i64),
    /// Removes a favorite directly (favorites screen).
    RemoveFavorite(i64),

    /// New title text for the search screen; matched case-insensitively.
    SearchTitle(String),
    /// `None` or an empty string clears the genre filter.
    SearchGenre(Option<String>),
    /// Empty clears the year filter.
    SearchYear(String),
    /// Inclusive rating floor; `None` removes it.
    SearchMinRating(Option<f64>),
    /// Resets every search criterion.
    ClearSearch,

    /// Sort selector on the favorites screen.
    FavoritesSort(SortKey),
    /// Genre selector on the favorites screen.
    FavoritesGenre(GenreFilter),

    /// Saves a note from the editor form. Blank title or text is ignored.
    SubmitNote(NoteDraft),
    /// Saves edits to an existing note.
    UpdateNote {
        /// Id of the note being edited.
        id: String,
        /// Fields changed in the editor.
        patch: NotePatch,
    },
    /// Deletes the note with this id.
    DeleteNote(String),
    /// Search text on the notes screen.
    NotesQuery(String),
    /// Tag selector on the notes screen.
    NotesTag(TagFilter),
    /// Sort selector on the notes screen.
    NotesSort(NoteSortKey),
}

/// Processes an event and reports whether the screen must be re-rendered.
///
/// Events that refer to unknown films or notes, or that do not change
/// anything, return `Ok(false)`.
///
/// # Parameters
///
/// * `state` - Application state to mutate
/// * `event` - User intent to apply
///
/// # Returns
///
/// `Ok(true)` when the view model changed and should be recomputed and
/// rendered, `Ok(false)` otherwise.
///
/// # Errors
///
/// Returns an error only when persisting the notes collection fails; the
/// notes store is left as it was before the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event<S: KeyValueStore>(state: &mut AppState<S>, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate(mode) => {
            if state.view_mode == *mode {
                return Ok(false);
            }
            tracing::debug!(from = ?state.view_mode, to = ?mode, "navigating");
            state.view_mode = *mode;
            Ok(true)
        }
        Event::SelectFilm(id) => {
            let Some(film) = state.find_film(*id).cloned() else {
                tracing::debug!(film_id = id, "unknown film, ignoring selection");
                return Ok(false);
            };
            state.detail.select(film);
            Ok(true)
        }
        Event::CloseDetail => {
            if !state.detail.is_showing() {
                return Ok(false);
            }
            state.detail.close();
            Ok(true)
        }
        Event::ToggleFavoriteInDetail => {
            Ok(state.detail.confirm_favorite_toggle(&mut state.favorites).is_some())
        }
        Event::AddNoteFromDetail => {
            let Some(draft) = state.detail.confirm_add_note() else {
                return Ok(false);
            };
            let note = state.notes.add(draft)?;
            tracing::debug!(note_id = %note.id, film_title = %note.film_title, "note created from detail");
            Ok(true)
        }
        Event::ToggleFavorite(id) => {
            let Some(film) = state.find_film(*id).cloned() else {
                tracing::debug!(film_id = id, "unknown film, ignoring favorite toggle");
                return Ok(false);
            };
            state.favorites.toggle(&film);
            Ok(true)
        }
        Event::RemoveFavorite(id) => Ok(state.favorites.remove(*id)),
        Event::SearchTitle(title) => {
            state.search.title.clone_from(title);
            state.apply_search_filter();
            Ok(true)
        }
        Event::SearchGenre(genre) => {
            state.search.genre = genre.clone().filter(|g| !g.is_empty());
            state.apply_search_filter();
            Ok(true)
        }
        Event::SearchYear(year) => {
            state.search.year = year.trim().to_string();
            state.apply_search_filter();
            Ok(true)
        }
        Event::SearchMinRating(rating) => {
            state.search.min_rating = *rating;
            state.apply_search_filter();
            Ok(true)
        }
        Event::ClearSearch => {
            if state.search.is_empty() {
                return Ok(false);
            }
            state.search = crate::query::SearchCriteria::default();
            state.apply_search_filter();
            Ok(true)
        }
        Event::FavoritesSort(key) => {
            state.favorites_criteria.sort = *key;
            Ok(true)
        }
        Event::FavoritesGenre(filter) => {
            state.favorites_criteria.genre = filter.clone();
            Ok(true)
        }
        Event::SubmitNote(draft) => {
            if !draft.is_submittable() {
                tracing::debug!("note draft incomplete, ignoring submit");
                return Ok(false);
            }
            let note = state.notes.add(draft.clone())?;
            tracing::debug!(note_id = %note.id, "note submitted");
            Ok(true)
        }
        Event::UpdateNote { id, patch } => Ok(state.notes.update(id, patch.clone())?.is_some()),
        Event::DeleteNote(id) => state.notes.delete(id),
        Event::NotesQuery(query) => {
            state.notes_criteria.query.clone_from(query);
            Ok(true)
        }
        Event::NotesTag(tag) => {
            state.notes_criteria.tag = tag.clone();
            Ok(true)
        }
        Event::NotesSort(key) => {
            state.notes_criteria.sort = *key;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{Film, NoteRating};
    use crate::storage::{MemoryStore, NOTES_KEY};
    use crate::store::NotesStore;

    fn state() -> AppState<MemoryStore> {
        let catalog = Catalog::new(vec![
            Film::new(1, "The Shawshank Redemption", "Drama", 1994, 9.3),
            Film::new(2, "Gladiator", "Action", 2000, 8.5),
            Film::new(3, "Fight Club", "Drama", 1999, 8.8),
        ])
        .unwrap();
        AppState::new(catalog, NotesStore::load(MemoryStore::default(), NOTES_KEY))
    }

    fn search_ids(state: &AppState<MemoryStore>) -> Vec<i64> {
        state.search_results.iter().map(|f| f.id).collect()
    }

    #[test]
    fn selecting_unknown_film_is_ignored() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::SelectFilm(42)).unwrap());
        assert!(!state.detail.is_showing());
    }

    #[test]
    fn detail_favorite_toggle_keeps_detail_open() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectFilm(3)).unwrap();
        handle_event(&mut state, &Event::ToggleFavoriteInDetail).unwrap();

        assert!(state.favorites.contains(3));
        assert_eq!(state.detail.current().map(|f| f.id), Some(3));
        assert!(state.compute_viewmodel().detail.unwrap().is_favorite);
    }

    #[test]
    fn add_note_from_detail_creates_seeded_note_and_closes() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectFilm(1)).unwrap();
        assert!(handle_event(&mut state, &Event::AddNoteFromDetail).unwrap());

        assert!(!state.detail.is_showing());
        let note = &state.notes.list()[0];
        assert_eq!(note.film_title, "The Shawshank Redemption");
        assert_eq!(note.film_id, 1);
        assert_eq!(note.rating.map(NoteRating::get), Some(5));
        assert!(note.note.is_empty());
        assert!(note.tags.is_empty());
    }

    #[test]
    fn add_note_without_selection_is_ignored() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::AddNoteFromDetail).unwrap());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn search_events_recompute_results() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchYear("19".to_string())).unwrap();
        assert_eq!(search_ids(&state), vec![1, 3]);

        handle_event(&mut state, &Event::SearchMinRating(Some(9.0))).unwrap();
        assert_eq!(search_ids(&state), vec![1]);

        handle_event(&mut state, &Event::SearchGenre(Some(String::new()))).unwrap();
        assert!(state.search.genre.is_none());

        assert!(handle_event(&mut state, &Event::ClearSearch).unwrap());
        assert_eq!(search_ids(&state), vec![1, 2, 3]);
        assert!(!handle_event(&mut state, &Event::ClearSearch).unwrap());
    }

    #[test]
    fn blank_note_submission_is_ignored() {
        let mut state = state();
        let draft = NoteDraft {
            film_title: "Gladiator".to_string(),
            note: "  ".to_string(),
            ..NoteDraft::default()
        };
        assert!(!handle_event(&mut state, &Event::SubmitNote(draft)).unwrap());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn note_lifecycle_through_events() {
        let mut state = state();
        let draft = NoteDraft {
            film_title: "Gladiator".to_string(),
            film_id: 2,
            note: "epic".to_string(),
            rating: Some(NoteRating::new(4).unwrap()),
            tags: vec!["Tavsiye".to_string()],
        };
        handle_event(&mut state, &Event::SubmitNote(draft)).unwrap();
        let id = state.notes.list()[0].id.clone();

        let patch = NotePatch {
            note: Some("still epic".to_string()),
            ..NotePatch::default()
        };
        assert!(handle_event(&mut state, &Event::UpdateNote { id: id.clone(), patch }).unwrap());
        assert_eq!(state.notes.get(&id).unwrap().note, "still epic");

        assert!(!handle_event(&mut state, &Event::UpdateNote { id: "missing".to_string(), patch: NotePatch::default() }).unwrap());

        assert!(handle_event(&mut state, &Event::DeleteNote(id)).unwrap());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn navigating_to_current_screen_does_not_rerender() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::Navigate(ViewMode::Home)).unwrap());
        assert!(handle_event(&mut state, &Event::Navigate(ViewMode::Favorites)).unwrap());
    }

    #[test]
    fn card_toggle_and_remove() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleFavorite(2)).unwrap();
        assert!(state.favorites.contains(2));
        assert!(handle_event(&mut state, &Event::RemoveFavorite(2)).unwrap());
        assert!(!handle_event(&mut state, &Event::RemoveFavorite(2)).unwrap());
    }
}
