//! Favorites view: genre filter plus a chosen sort order.

use super::collation::TitleCollator;
use crate::domain::Listing;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Genre selector of the favorites view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    /// Every favorite.
    #[default]
    All,
    /// Exact, case-sensitive genre name as it appears on the films.
    Only(String),
}

impl GenreFilter {
    /// Whether a film of `genre` passes the filter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filmbox::query::GenreFilter;
    ///
    /// let only_crime = GenreFilter::Only("Crime".to_string());
    /// assert!(only_crime.matches("Crime"));
    /// assert!(!only_crime.matches("crime"));
    /// assert!(GenreFilter::All.matches("Drama"));
    /// ```
    #[must_use]
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == genre,
        }
    }
}

/// Sort order of the favorites view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently added first. Entries without a date sort last.
    #[default]
    DateAdded,
    /// Title ascending, in locale-aware order (`Çiçek` before `Dünya`).
    Title,
    /// Newest release first.
    Year,
    /// Highest rating first.
    Rating,
}

/// Criteria of the favorites view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesCriteria {
    /// Genre the favorites must have.
    pub genre: GenreFilter,
    /// Order of the resulting list.
    pub sort: SortKey,
}

/// Filters `source` by genre and sorts it by the chosen key.
///
/// The sort is stable, so ties keep their input order.
///
/// # Examples
///
/// ```
/// use filmbox::query::favorites::{view, FavoritesCriteria, SortKey};
/// use filmbox::Film;
///
/// let films = vec![
///     Film::new(1, "A", "Drama", 1994, 9.3),
///     Film::new(2, "B", "Drama", 2010, 8.0),
///     Film::new(3, "C", "Drama", 1999, 8.8),
/// ];
/// let criteria = FavoritesCriteria { sort: SortKey::Year, ..Default::default() };
/// let years: Vec<i32> = view(&films, &criteria).iter().map(|f| f.year).collect();
/// assert_eq!(years, vec![2010, 1999, 1994]);
/// ```
#[must_use]
pub fn view<T: Listing + Clone>(source: &[T], criteria: &FavoritesCriteria) -> Vec<T> {
    let _span = tracing::debug_span!("favorites_view",
        total = source.len(),
        genre = ?criteria.genre,
        sort = ?criteria.sort
    ).entered();

    let mut result: Vec<T> = source
        .iter()
        .filter(|item| criteria.genre.matches(&item.film().genre))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Title => {
            let collator = TitleCollator::new();
            result.sort_by(|a, b| collator.compare(&a.film().title, &b.film().title));
        }
        key => result.sort_by(|a, b| compare(a, b, key)),
    }

    tracing::debug!(count = result.len(), "favorites view computed");
    result
}

/// Distinct genres of `source` in first-seen order, for the genre selector.
#[must_use]
pub fn genre_options<T: Listing>(source: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    source
        .iter()
        .map(|item| item.film().genre.as_str())
        .filter(|genre| seen.insert(*genre))
        .map(String::from)
        .collect()
}

/// Orders by every key except `Title`, which needs a collator.
fn compare<T: Listing>(a: &T, b: &T, key: SortKey) -> Ordering {
    let (fa, fb) = (a.film(), b.film());
    match key {
        SortKey::DateAdded => date_or_epoch(b.date_added()).cmp(&date_or_epoch(a.date_added())),
        SortKey::Title => fa.title.cmp(&fb.title),
        SortKey::Year => fb.year.cmp(&fa.year),
        SortKey::Rating => fb.rating.total_cmp(&fa.rating),
    }
}

/// Missing dates count as the Unix epoch, i.e. older than any real entry.
fn date_or_epoch(date: Option<DateTime<Utc>>) -> DateTime<Utc> {
    date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
