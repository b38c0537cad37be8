//! Film and favorite domain models.
//!
//! A [`Film`] is an immutable catalog record supplied from outside the crate.
//! A [`FavoriteEntry`] is the copy of a film kept by the favorites store, with
//! the moment it was marked grafted on as `dateAdded`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog film record.
///
/// Serialized with camelCase field names so that catalogs exported by the web
/// frontend load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Unique within the catalog.
    pub id: i64,
    pub title: String,
    /// Single genre name, e.g. `"Drama"`.
    pub genre: String,
    /// Release year.
    pub year: i32,
    /// Expected range is 0 to 10.
    pub rating: f64,
    /// Poster image URI.
    pub poster: String,
    pub description: String,
    pub director: String,
    /// Principal cast in billing order.
    pub cast: Vec<String>,
    /// Running time in minutes.
    pub duration: u32,
    /// Original language, when the dataset provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Country of production, when the dataset provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Film {
    /// Creates a film with the identifying fields set and everything else empty.
    ///
    /// Mostly useful for tests and for embedders assembling catalogs in code.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmbox::Film;
    ///
    /// let film = Film::new(1, "The Shawshank Redemption", "Drama", 1994, 9.3);
    /// assert_eq!(film.year, 1994);
    /// assert!(film.cast.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, genre: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
            poster: String::new(),
            description: String::new(),
            director: String::new(),
            cast: Vec::new(),
            duration: 0,
            language: None,
            country: None,
        }
    }
}

/// A film the user has marked as a favorite.
///
/// Flattens the film so the serialized shape is the film record plus a
/// `dateAdded` ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    /// The film as it was when marked.
    #[serde(flatten)]
    pub film: Film,
    /// When the film was marked. Kept unchanged by repeated adds.
    pub date_added: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Wraps `film`, stamping it with the current time.
    #[must_use]
    pub fn new(film: Film) -> Self {
        Self {
            film,
            date_added: Utc::now(),
        }
    }
}

/// Anything the filter/sort engine can list: a bare film or a favorite.
///
/// Bare films have no `dateAdded`; the engine sorts them as the oldest
/// possible entries.
pub trait Listing {
    /// The underlying film record.
    fn film(&self) -> &Film;

    /// When the entry was marked as favorite, if it ever was.
    fn date_added(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl Listing for Film {
    fn film(&self) -> &Film {
        self
    }
}

impl Listing for FavoriteEntry {
    fn film(&self) -> &Film {
        &self.film
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        Some(self.date_added)
    }
}
