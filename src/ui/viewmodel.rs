//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and handed to whatever renders the screens. They hold display-ready data
//! and no behavior.
//!
//! # Example
//!
//! ```rust
//! use filmbox::ui::viewmodel::{FilmCard, UIViewModel, Content, HeaderInfo};
//! use filmbox::Film;
//!
//! let film = Film::new(1, "Heat", "Crime", 1995, 8.3);
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Popular Films (1)".to_string() },
//!     content: Content::Films {
//!         cards: vec![FilmCard::new(&film, true, None)],
//!         genre_options: vec!["Crime".to_string()],
//!     },
//!     empty_state: None,
//!     detail: None,
//! };
//! assert_eq!(vm.content.len(), 1);
//! ```

use crate::domain::{Film, FilmNote};
use crate::query::NoteStats;
use chrono::{DateTime, Utc};

/// Complete render snapshot of one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Screen title with row count.
    pub header: HeaderInfo,

    /// The screen's list.
    pub content: Content,

    /// Message shown instead of an empty list.
    pub empty_state: Option<EmptyState>,

    /// The detail surface, when a film is selected.
    pub detail: Option<DetailPanel>,
}

/// List body of a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Film grid for the home, search and favorites screens.
    Films {
        /// Cards in display order.
        cards: Vec<FilmCard>,
        /// Choices for the genre selector; the view adds its own "all" entry.
        genre_options: Vec<String>,
    },
    /// Note list for the notes screen.
    Notes {
        /// Notes after filtering and sorting.
        notes: Vec<FilmNote>,
        /// Every tag in use, for the tag selector.
        tag_options: Vec<String>,
        /// Present whenever at least one note exists.
        stats: Option<NoteStats>,
    },
}

impl Content {
    /// Number of list rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Films { cards, .. } => cards.len(),
            Self::Notes { notes, .. } => notes.len(),
        }
    }

    /// Whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One film tile in a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmCard {
    /// Film id, sent back in card events.
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub year: i32,
    /// Catalog rating, 0 to 10.
    pub rating: f64,
    /// Poster image URI.
    pub poster: String,
    /// Drives the heart icon.
    pub is_favorite: bool,
    /// Set on the favorites screen only.
    pub date_added: Option<DateTime<Utc>>,
}

impl FilmCard {
    /// Builds a card from a film.
    ///
    /// # Parameters
    ///
    /// * `film` - Film shown on the card
    /// * `is_favorite` - Whether the heart icon is filled
    /// * `date_added` - When the film became a favorite, if shown
    #[must_use]
    pub fn new(film: &Film, is_favorite: bool, date_added: Option<DateTime<Utc>>) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
            genre: film.genre.clone(),
            year: film.year,
            rating: film.rating,
            poster: film.poster.clone(),
            is_favorite,
            date_added,
        }
    }
}

/// The focused film with its available actions.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    /// Full film record for the detail layout.
    pub film: Film,
    /// Decides between "add to favorites" and "remove favorite".
    pub is_favorite: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Screen title with the row count, e.g. `"Favorites (3)"`.
    pub title: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No favorites yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
