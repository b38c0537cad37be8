//! Film note domain model.
//!
//! Notes are free-form annotations about a film. They are independent of the
//! catalog: `film_id` is an advisory link and `film_title` is free text.

use super::error::{FilmBoxError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag labels suggested by the note editor.
pub const COMMON_TAGS: [&str; 7] = [
    "İzlendi",
    "İzlenecek",
    "Favoriler",
    "Tekrar İzle",
    "Tavsiye",
    "Klasik",
    "Yeni Keşif",
];

/// A note's star rating, always within 1..=5.
///
/// Deserialization rejects out-of-range values.
///
/// # Examples
///
/// ```
/// use filmbox::domain::NoteRating;
///
/// assert_eq!(NoteRating::new(4).unwrap().get(), 4);
/// assert!(NoteRating::new(0).is_err());
/// assert!(NoteRating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct NoteRating(u8);

impl NoteRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validates `value` as a rating.
    ///
    /// # Errors
    ///
    /// Returns [`FilmBoxError::InvalidRating`] when `value` is outside 1..=5.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(FilmBoxError::InvalidRating(value))
    }

    /// Maps a catalog rating (0 to 10) onto the five-star scale.
    ///
    /// Halves and rounds, then clamps into 1..=5, so 8.8 becomes 4 and 0.0 becomes 1.
    #[must_use]
    pub fn from_film_rating(rating: f64) -> Self {
        let stars = if rating.is_finite() { (rating / 2.0).round() } else { 1.0 };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = stars.clamp(f64::from(Self::MIN), f64::from(Self::MAX)) as u8;
        Self(stars)
    }

    /// Number of stars, 1 to 5.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for NoteRating {
    type Error = FilmBoxError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NoteRating> for i64 {
    fn from(rating: NoteRating) -> Self {
        Self::from(rating.0)
    }
}

/// A persisted note about a film.
///
/// Field names are serialized in camelCase; this is the on-disk format of the
/// notes collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmNote {
    /// Creation time in milliseconds as a decimal string, unique per store.
    pub id: String,
    /// Free text; need not match a catalog title.
    pub film_title: String,
    /// Advisory link to a catalog film, `0` when the note was written freely.
    #[serde(default)]
    pub film_id: i64,
    /// The note body.
    pub note: String,
    /// Optional star rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<NoteRating>,
    /// Labels in the order they were toggled on, without duplicates.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set once, when the note is added.
    pub created_at: DateTime<Utc>,
    /// Refreshed by every update; never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl FilmNote {
    /// Builds a note from a draft with the given identity and timestamp.
    ///
    /// `created_at` and `updated_at` both start at `now`.
    #[must_use]
    pub fn from_draft(id: String, draft: NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            film_title: draft.film_title,
            film_id: draft.film_id,
            note: draft.note,
            rating: draft.rating,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the fields present in `patch` and stamps `updated_at`.
    pub fn apply(&mut self, patch: NotePatch, now: DateTime<Utc>) {
        if let Some(film_title) = patch.film_title {
            self.film_title = film_title;
        }
        if let Some(film_id) = patch.film_id {
            self.film_id = film_id;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }
}

/// Input for creating a note; the store assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub film_title: String,
    /// `0` when not written from a catalog film.
    pub film_id: i64,
    pub note: String,
    pub rating: Option<NoteRating>,
    /// Usually picked from [`COMMON_TAGS`], but any label is accepted.
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// Whether the editor form may submit this draft.
    ///
    /// Both the film title and the note text must contain something other
    /// than whitespace. Drafts seeded from the detail view bypass this check.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::domain::NoteDraft;
    ///
    /// let mut draft = NoteDraft { film_title: "Alien".into(), ..Default::default() };
    /// assert!(!draft.is_submittable());
    /// draft.note = "tense".into();
    /// assert!(draft.is_submittable());
    /// ```
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.film_title.trim().is_empty() && !self.note.trim().is_empty()
    }

    /// Toggles `tag` on this draft.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_tag(&mut self.tags, tag);
    }
}

/// Partial update for an existing note.
///
/// `None` leaves the field untouched. For `rating`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    /// New title, if changed.
    pub film_title: Option<String>,
    /// New film link, if changed.
    pub film_id: Option<i64>,
    /// New body, if changed.
    pub note: Option<String>,
    /// `Some(None)` clears the rating; `Some(Some(r))` sets it.
    pub rating: Option<Option<NoteRating>>,
    /// Replacement tag list, if changed.
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    /// A patch that writes back every editable field of `note` as it is.
    #[must_use]
    pub fn from_note(note: &FilmNote) -> Self {
        Self {
            film_title: Some(note.film_title.clone()),
            film_id: Some(note.film_id),
            note: Some(note.note.clone()),
            rating: Some(note.rating),
            tags: Some(note.tags.clone()),
        }
    }
}

/// Removes `tag` from `tags` if present, appends it otherwise.
///
/// All copies are removed, so a toggle never leaves a duplicate behind.
pub fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if tags.iter().any(|t| t == tag) {
        tags.retain(|t| t != tag);
    } else {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> FilmNote {
        let now = Utc::now();
        FilmNote::from_draft(
            "1700000000000".to_string(),
            NoteDraft {
                film_title: "Se7en".to_string(),
                film_id: 4,
                note: "bleak".to_string(),
                rating: Some(NoteRating::new(4).unwrap()),
                tags: vec!["Klasik".to_string()],
            },
            now,
        )
    }

    #[test]
    fn rating_from_film_rating_rounds_and_clamps() {
        assert_eq!(NoteRating::from_film_rating(8.8).get(), 4);
        assert_eq!(NoteRating::from_film_rating(9.3).get(), 5);
        assert_eq!(NoteRating::from_film_rating(10.0).get(), 5);
        assert_eq!(NoteRating::from_film_rating(0.0).get(), 1);
        assert_eq!(NoteRating::from_film_rating(f64::NAN).get(), 1);
    }

    #[test]
    fn note_serializes_with_camel_case_fields() {
        let note = sample_note();
        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(value["filmTitle"], "Se7en");
        assert_eq!(value["filmId"], 4);
        assert_eq!(value["rating"], 4);
        assert!(value["createdAt"].is_string());
        assert!(value["updatedAt"].is_string());
    }

    #[test]
    fn note_without_rating_omits_the_field() {
        let mut note = sample_note();
        note.rating = None;
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("rating").is_none());
    }

    #[test]
    fn out_of_range_rating_fails_to_deserialize() {
        let mut value = serde_json::to_value(sample_note()).unwrap();
        value["rating"] = serde_json::json!(9);
        assert!(serde_json::from_value::<FilmNote>(value).is_err());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut note = sample_note();
        let later = note.updated_at + chrono::Duration::seconds(5);

        note.apply(
            NotePatch {
                note: Some("ok".to_string()),
                ..NotePatch::default()
            },
            later,
        );

        assert_eq!(note.note, "ok");
        assert_eq!(note.film_title, "Se7en");
        assert_eq!(note.rating.map(NoteRating::get), Some(4));
        assert_eq!(note.updated_at, later);
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn apply_can_clear_rating() {
        let mut note = sample_note();
        let now = note.updated_at;
        note.apply(
            NotePatch {
                rating: Some(None),
                ..NotePatch::default()
            },
            now,
        );
        assert!(note.rating.is_none());
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut tags = vec![];
        toggle_tag(&mut tags, "İzlendi");
        assert_eq!(tags, vec!["İzlendi".to_string()]);
        toggle_tag(&mut tags, "Tavsiye");
        toggle_tag(&mut tags, "İzlendi");
        assert_eq!(tags, vec!["Tavsiye".to_string()]);
    }

    #[test]
    fn blank_drafts_are_not_submittable() {
        let draft = NoteDraft {
            film_title: "   ".to_string(),
            note: "something".to_string(),
            ..NoteDraft::default()
        };
        assert!(!draft.is_submittable());
    }
}
