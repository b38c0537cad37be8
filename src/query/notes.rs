//! Notes view: text search, tag filter, sort order, and summary statistics.

use super::collation::TitleCollator;
use crate::domain::FilmNote;
use std::collections::HashSet;

/// Tag selector of the notes view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// Every note, regardless of tags.
    #[default]
    All,
    /// Notes carrying this exact tag.
    Only(String),
}

/// Sort order of the notes view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteSortKey {
    /// Most recently updated first.
    #[default]
    UpdatedAt,
    /// Most recently created first.
    CreatedAt,
    /// Film title ascending, in locale-aware order.
    FilmTitle,
}

/// Criteria of the notes view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesCriteria {
    /// Case-insensitive substring of either the film title or the note text.
    pub query: String,
    /// Tag the notes must carry.
    pub tag: TagFilter,
    /// Order of the resulting list.
    pub sort: NoteSortKey,
}

/// Aggregate figures shown under the notes list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteStats {
    /// Number of notes.
    pub total: usize,
    /// Distinct film titles.
    pub distinct_films: usize,
    /// Notes rated 4 stars or more.
    pub high_rated: usize,
    /// Distinct tags across all notes.
    pub distinct_tags: usize,
}

/// Filters and sorts `notes` by `criteria`. Ties keep input order.
#[must_use]
pub fn view(notes: &[FilmNote], criteria: &NotesCriteria) -> Vec<FilmNote> {
    let _span = tracing::debug_span!("notes_view",
        total = notes.len(),
        query_len = criteria.query.len(),
        tag = ?criteria.tag,
        sort = ?criteria.sort
    ).entered();

    let query = criteria.query.to_lowercase();

    let mut result: Vec<FilmNote> = notes
        .iter()
        .filter(|n| {
            let text_match = n.film_title.to_lowercase().contains(&query) || n.note.to_lowercase().contains(&query);
            let tag_match = match &criteria.tag {
                TagFilter::All => true,
                TagFilter::Only(tag) => n.tags.iter().any(|t| t == tag),
            };
            text_match && tag_match
        })
        .cloned()
        .collect();

    match criteria.sort {
        NoteSortKey::UpdatedAt => result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        NoteSortKey::CreatedAt => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        NoteSortKey::FilmTitle => {
            let collator = TitleCollator::new();
            result.sort_by(|a, b| collator.compare(&a.film_title, &b.film_title));
        }
    }

    tracing::debug!(count = result.len(), "notes view computed");
    result
}

/// Distinct tags across `notes` in first-seen order.
#[must_use]
pub fn all_tags(notes: &[FilmNote]) -> Vec<String> {
    let mut seen = HashSet::new();
    notes
        .iter()
        .flat_map(|n| n.tags.iter().map(String::as_str))
        .filter(|t| seen.insert(*t))
        .map(String::from)
        .collect()
}

/// Computes the summary figures for `notes`.
///
/// # Examples
///
/// ```
/// use filmbox::query::notes::stats;
///
/// let s = stats(&[]);
/// assert_eq!(s.total, 0);
/// assert_eq!(s.distinct_tags, 0);
/// ```
#[must_use]
pub fn stats(notes: &[FilmNote]) -> NoteStats {
    let distinct_films = notes.iter().map(|n| n.film_title.as_str()).collect::<HashSet<_>>().len();
    let high_rated = notes
        .iter()
        .filter(|n| n.rating.is_some_and(|r| r.get() >= 4))
        .count();

    NoteStats {
        total: notes.len(),
        distinct_films,
        high_rated,
        distinct_tags: all_tags(notes).len(),
    }
}
