//! The static, read-only film catalog.
//!
//! The catalog is supplied from outside the crate (a JSON export of the film
//! dataset, or films built in code) and never changes after construction.

use crate::domain::error::{FilmBoxError, Result};
use crate::domain::Film;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, read-only sequence of films with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    films: Vec<Film>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FilmBoxError::Catalog`] if two films share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::{Catalog, Film};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Film::new(1, "Heat", "Crime", 1995, 8.3),
    ///     Film::new(2, "Alien", "Sci-Fi", 1979, 8.5),
    /// ])?;
    /// assert_eq!(catalog.get(2).map(|f| f.title.as_str()), Some("Alien"));
    /// assert!(Catalog::new(vec![Film::new(1, "A", "Drama", 2000, 5.0), Film::new(1, "B", "Drama", 2001, 5.0)]).is_err());
    /// # Ok::<(), filmbox::FilmBoxError>(())
    /// ```
    pub fn new(films: Vec<Film>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(films.len());
        if let Some(dup) = films.iter().find(|f| !seen.insert(f.id)) {
            return Err(FilmBoxError::Catalog(format!("duplicate film id {}", dup.id)));
        }
        tracing::debug!(film_count = films.len(), "catalog loaded");
        Ok(Self { films })
    }

    /// Parses a JSON array of films.
    ///
    /// # Errors
    ///
    /// Returns [`FilmBoxError::Catalog`] on malformed JSON or duplicate ids.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let films: Vec<Film> = serde_json::from_str(json)
            .map_err(|e| FilmBoxError::Catalog(format!("failed to parse catalog: {e}")))?;
        Self::new(films)
    }

    /// Reads a JSON array of films from `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`FilmBoxError::Catalog`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading catalog file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// All films in catalog order.
    ///
    /// This is the home screen's list and the source of every search.
    #[must_use]
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Looks up a film by id.
    ///
    /// # Parameters
    ///
    /// * `id` - Film id
    ///
    /// # Returns
    ///
    /// The film, or `None` if the catalog has no film with that id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    /// Distinct genres in first-seen order.
    ///
    /// Feeds the genre selector of the home and search screens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use filmbox::{Catalog, Film};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Film::new(1, "Heat", "Crime", 1995, 8.3),
    ///     Film::new(2, "Alien", "Sci-Fi", 1979, 8.5),
    ///     Film::new(3, "Se7en", "Crime", 1995, 8.6),
    /// ])?;
    /// assert_eq!(catalog.genres(), vec!["Crime", "Sci-Fi"]);
    /// # Ok::<(), filmbox::FilmBoxError>(())
    /// ```
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.films
            .iter()
            .map(|f| f.genre.as_str())
            .filter(|genre| seen.insert(*genre))
            .map(String::from)
            .collect()
    }

    /// Number of films.
    #[must_use]
    pub fn len(&self) -> usize {
        self.films.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array_in_order() {
        let json = r#"[
            {"id": 2, "title": "Alien", "genre": "Sci-Fi", "year": 1979, "rating": 8.5,
             "poster": "", "description": "", "director": "Ridley Scott", "cast": [], "duration": 117},
            {"id": 1, "title": "Heat", "genre": "Crime", "year": 1995, "rating": 8.3,
             "poster": "", "description": "", "director": "Michael Mann", "cast": [], "duration": 170}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        let ids: Vec<i64> = catalog.films().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Catalog::from_json_str("{"), Err(FilmBoxError::Catalog(_))));
    }

    #[test]
    fn genres_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            Film::new(1, "A", "Drama", 1994, 9.0),
            Film::new(2, "B", "Crime", 1994, 9.0),
            Film::new(3, "C", "Drama", 1994, 9.0),
        ])
        .unwrap();
        assert_eq!(catalog.genres(), vec!["Drama".to_string(), "Crime".to_string()]);
    }
}
