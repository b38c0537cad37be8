//! Favorites store.
//!
//! Holds the films the user has marked, at most one entry per film id. The
//! store lives only as long as the process: unlike notes, favorites are not
//! written to durable storage.

use crate::domain::{FavoriteEntry, Film};

/// In-memory set of favorite films keyed by film id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `film` as a favorite, stamping `dateAdded` with the current time.
    ///
    /// If the film is already a favorite nothing changes; in particular the
    /// original `dateAdded` is kept. Returns whether an entry was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::{FavoritesStore, Film};
    ///
    /// let mut favorites = FavoritesStore::new();
    /// let film = Film::new(1, "Heat", "Crime", 1995, 8.3);
    /// assert!(favorites.add(&film));
    /// assert!(!favorites.add(&film));
    /// assert_eq!(favorites.list().len(), 1);
    /// ```
    pub fn add(&mut self, film: &Film) -> bool {
        if self.contains(film.id) {
            tracing::debug!(film_id = film.id, "film already in favorites");
            return false;
        }
        self.entries.push(FavoriteEntry::new(film.clone()));
        tracing::debug!(film_id = film.id, title = %film.title, "added to favorites");
        true
    }

    /// Removes the favorite entry for a film.
    ///
    /// # Parameters
    ///
    /// * `id` - Film id to remove
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the film was not a favorite
    /// (which is a no-op, not an error).
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.film.id != id);
        let removed = self.entries.len() != before;
        tracing::debug!(film_id = id, removed, "remove from favorites");
        removed
    }

    /// Adds `film` if absent, removes it otherwise.
    ///
    /// This is the action behind the heart icon on film cards and the detail
    /// surface.
    ///
    /// # Parameters
    ///
    /// * `film` - Film to toggle; only its id decides membership
    ///
    /// # Returns
    ///
    /// The film's membership after the call: `true` if it is now a favorite.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::{FavoritesStore, Film};
    ///
    /// let mut favorites = FavoritesStore::new();
    /// let film = Film::new(3, "Alien", "Sci-Fi", 1979, 8.5);
    /// assert!(favorites.toggle(&film));
    /// assert!(!favorites.toggle(&film));
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, film: &Film) -> bool {
        if self.contains(film.id) {
            self.remove(film.id);
            false
        } else {
            self.add(film)
        }
    }

    /// Whether the film with `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.film.id == id)
    }

    /// The favorite entry for `id`, including its `dateAdded`.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.film.id == id)
    }

    /// Current entries in insertion order. Views apply their own sort.
    #[must_use]
    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn film(id: i64) -> Film {
        Film::new(id, format!("Film {id}"), "Drama", 2000, 7.0)
    }

    #[test]
    fn add_stamps_date_within_call_window() {
        let mut favorites = FavoritesStore::new();
        let before = Utc::now();
        favorites.add(&film(1));
        let after = Utc::now();

        let entry = favorites.get(1).unwrap();
        assert!(entry.date_added >= before && entry.date_added <= after);
    }

    #[test]
    fn second_add_keeps_first_date() {
        let mut favorites = FavoritesStore::new();
        favorites.add(&film(1));
        let first = favorites.get(1).unwrap().date_added;

        std::thread::sleep(std::time::Duration::from_millis(2));
        favorites.add(&film(1));

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.get(1).unwrap().date_added, first);
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut favorites = FavoritesStore::new();
        favorites.add(&film(1));
        assert!(!favorites.remove(42));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = FavoritesStore::new();
        assert!(favorites.toggle(&film(3)));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(&film(3)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut favorites = FavoritesStore::new();
        favorites.add(&film(2));
        favorites.add(&film(1));
        favorites.add(&film(3));
        let ids: Vec<i64> = favorites.list().iter().map(|e| e.film.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
