//! Screen selection for the application.
//!
//! The view layer shows one screen at a time. The screen decides which list
//! the view model is built from; the detail surface can sit on top of any of
//! the film screens.
//!
//! # Example
//!
//! ```rust
//! use filmbox::app::ViewMode;
//!
//! assert_eq!(ViewMode::default(), ViewMode::Home);
//! assert!(ViewMode::Search.lists_films());
//! assert!(!ViewMode::Notes.lists_films());
//! ```

/// Screen currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The full catalog in catalog order.
    #[default]
    Home,

    /// The catalog narrowed by the search criteria.
    Search,

    /// Favorite films, filtered by genre and sorted.
    Favorites,

    /// The user's notes with search, tag filter and statistics.
    Notes,
}

impl ViewMode {
    /// Whether this screen shows film cards (as opposed to notes).
    #[must_use]
    pub const fn lists_films(self) -> bool {
        !matches!(self, Self::Notes)
    }

    /// Title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Popular Films",
            Self::Search => "Search",
            Self::Favorites => "Favorites",
            Self::Notes => "My Film Notes",
        }
    }
}
