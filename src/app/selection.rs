//! Selection/detail coordinator.
//!
//! Tracks which single film is shown on the detail surface and turns the
//! actions confirmed there into calls on the favorites store or into a note
//! creation request.
//!
//! # State Machine
//!
//! ```text
//!            select(film)                 select(other)
//!   Idle ───────────────────▶ Showing ────────────────┐
//!    ▲                          │  ▲                  │
//!    └──── close / add note ────┘  └──────────────────┘
//! ```

use crate::domain::{Film, NoteDraft, NoteRating};
use crate::store::FavoritesStore;

/// Whether the detail surface is visible, and for which film.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    /// Nothing selected; the detail surface is hidden.
    #[default]
    Idle,
    /// The detail surface shows this film.
    Showing(Film),
}

/// Owns the [`DetailState`] and its transitions.
#[derive(Debug, Clone, Default)]
pub struct DetailCoordinator {
    state: DetailState,
}

impl DetailCoordinator {
    /// Creates a coordinator with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `film`, replacing whatever was shown before.
    pub fn select(&mut self, film: Film) {
        tracing::debug!(film_id = film.id, title = %film.title, "detail opened");
        self.state = DetailState::Showing(film);
    }

    /// Hides the detail surface. Closing while idle does nothing.
    pub fn close(&mut self) {
        if matches!(self.state, DetailState::Showing(_)) {
            tracing::debug!("detail closed");
        }
        self.state = DetailState::Idle;
    }

    /// Current state, for matching in the view layer.
    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// The film on the detail surface, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Film> {
        match &self.state {
            DetailState::Showing(film) => Some(film),
            DetailState::Idle => None,
        }
    }

    /// Whether the detail surface is visible.
    #[must_use]
    pub const fn is_showing(&self) -> bool {
        matches!(self.state, DetailState::Showing(_))
    }

    /// Adds the shown film to `favorites`, or removes it if already there.
    ///
    /// Leaves the detail surface as it is. Returns the film's new membership,
    /// or `None` when nothing is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::app::DetailCoordinator;
    /// use filmbox::{FavoritesStore, Film};
    ///
    /// let mut favorites = FavoritesStore::new();
    /// let mut detail = DetailCoordinator::new();
    /// assert_eq!(detail.confirm_favorite_toggle(&mut favorites), None);
    ///
    /// detail.select(Film::new(7, "Heat", "Crime", 1995, 8.3));
    /// assert_eq!(detail.confirm_favorite_toggle(&mut favorites), Some(true));
    /// assert_eq!(detail.confirm_favorite_toggle(&mut favorites), Some(false));
    /// assert!(detail.is_showing());
    /// ```
    pub fn confirm_favorite_toggle(&self, favorites: &mut FavoritesStore) -> Option<bool> {
        let film = self.current()?;
        let now_favorite = favorites.toggle(film);
        tracing::debug!(film_id = film.id, now_favorite, "favorite toggled from detail");
        Some(now_favorite)
    }

    /// Closes the detail surface and returns a note draft seeded from the film.
    ///
    /// The draft carries the film's title and id, its rating mapped onto five
    /// stars, empty text and no tags. The film is read before the close so the
    /// seed never comes from a cleared selection. Returns `None` when idle.
    pub fn confirm_add_note(&mut self) -> Option<NoteDraft> {
        let draft = self.current().map(|film| NoteDraft {
            film_title: film.title.clone(),
            film_id: film.id,
            note: String::new(),
            rating: Some(NoteRating::from_film_rating(film.rating)),
            tags: Vec::new(),
        })?;
        self.close();
        tracing::debug!(film_id = draft.film_id, "note requested from detail");
        Some(draft)
    }
}
