//! Notes store with write-through persistence.
//!
//! The whole collection is loaded once from a [`KeyValueStore`] when the store
//! is created and rewritten in full after every mutation. Stored data that is
//! missing or cannot be parsed yields an empty collection instead of an error.

use crate::domain::error::{FilmBoxError, Result};
use crate::domain::{FilmNote, NoteDraft, NotePatch};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Duration, Utc};

/// Ordered collection of notes, persisted under a single storage key.
#[derive(Debug)]
pub struct NotesStore<S> {
    storage: S,
    key: String,
    notes: Vec<FilmNote>,
    /// Last issued id, in milliseconds; ids never repeat or go backwards.
    last_id: i64,
}

impl<S: KeyValueStore> NotesStore<S> {
    /// Loads the collection stored under `key`.
    ///
    /// Never fails: an absent key, a read error, or a malformed value all start
    /// an empty collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::storage::{MemoryStore, NOTES_KEY};
    /// use filmbox::NotesStore;
    ///
    /// let storage = MemoryStore::with_entry(NOTES_KEY, "definitely not json");
    /// let notes = NotesStore::load(storage, NOTES_KEY);
    /// assert!(notes.is_empty());
    /// ```
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let _span = tracing::debug_span!("notes_load", key = %key).entered();

        let notes = match storage.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<FilmNote>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored notes are malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => {
                tracing::debug!("no stored notes");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored notes, starting empty");
                Vec::new()
            }
        };

        let last_id = notes
            .iter()
            .filter_map(|n| n.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        tracing::debug!(count = notes.len(), "notes loaded");

        Self {
            storage,
            key,
            notes,
            last_id,
        }
    }

    /// Creates a note from `draft`, appends it and persists the collection.
    ///
    /// The id is the creation time in milliseconds, bumped past the previous id
    /// when two notes are created within the same millisecond.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written; the store is then
    /// left unchanged.
    pub fn add(&mut self, draft: NoteDraft) -> Result<&FilmNote> {
        let _span = tracing::debug_span!("notes_add", film_id = draft.film_id).entered();

        let now = Utc::now();
        let id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        let note = FilmNote::from_draft(id.to_string(), draft, now);

        let mut next = self.notes.clone();
        next.push(note);
        self.commit(next)?;
        self.last_id = id;

        tracing::debug!(note_id = id, "note added");
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Merges `patch` into the note with `id` and persists the collection.
    ///
    /// `updatedAt` is always refreshed, even if the patch changes nothing else.
    /// Returns `Ok(None)` without touching storage if no such note exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written; the store is then
    /// left unchanged.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<Option<&FilmNote>> {
        let _span = tracing::debug_span!("notes_update", note_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("note not found, ignoring update");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        let now = next_timestamp(next[index].updated_at);
        next[index].apply(patch, now);
        self.commit(next)?;

        tracing::debug!("note updated");
        Ok(Some(&self.notes[index]))
    }

    /// Removes the note with `id` and persists the collection.
    ///
    /// Returns whether a note was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("notes_delete", note_id = %id).entered();

        let mut next = self.notes.clone();
        next.retain(|n| n.id != id);
        let removed = next.len() != self.notes.len();
        self.commit(next)?;

        tracing::debug!(removed, "note delete processed");
        Ok(removed)
    }

    /// Notes in insertion order.
    #[must_use]
    pub fn list(&self) -> &[FilmNote] {
        &self.notes
    }

    /// Looks up a note by id.
    ///
    /// # Parameters
    ///
    /// * `id` - Note id as issued by [`NotesStore::add`]
    ///
    /// # Returns
    ///
    /// The note, or `None` if no note has that id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FilmNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Number of notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The storage backend, for inspection.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Writes `next` in full, then makes it the current collection.
    fn commit(&mut self, next: Vec<FilmNote>) -> Result<()> {
        let json = serde_json::to_string(&next)
            .map_err(|e| FilmBoxError::Storage(format!("failed to serialize notes: {e}")))?;
        self.storage.set(&self.key, &json)?;
        self.notes = next;
        tracing::trace!(count = self.notes.len(), bytes = json.len(), "notes persisted");
        Ok(())
    }
}

/// Current time, forced strictly past `previous` so updates always advance.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
