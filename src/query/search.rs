//! Search view filtering.
//!
//! All active criteria combine with logical AND. An inactive criterion (empty
//! text, `None`) matches everything.

use crate::domain::Listing;

/// Criteria of the search view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title. Empty matches all.
    pub title: String,
    /// Case-insensitive exact genre.
    pub genre: Option<String>,
    /// Substring of the decimal year, so `"19"` matches 1994 and 2019. Empty matches all.
    pub year: String,
    /// Inclusive minimum rating.
    pub min_rating: Option<f64>,
}

impl SearchCriteria {
    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.genre.is_none() && self.year.is_empty() && self.min_rating.is_none()
    }

    /// Whether `item` satisfies every active criterion.
    #[must_use]
    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        let film = item.film();

        if !self.title.is_empty() && !film.title.to_lowercase().contains(&self.title.to_lowercase()) {
            return false;
        }

        if let Some(genre) = self.genre.as_deref() {
            if film.genre.to_lowercase() != genre.to_lowercase() {
                return false;
            }
        }

        if !self.year.is_empty() && !film.year.to_string().contains(&self.year) {
            return false;
        }

        self.min_rating.map_or(true, |min| film.rating >= min)
    }
}

/// Returns the items of `source` matching `criteria`, in source order.
///
/// # Examples
///
/// ```
/// use filmbox::query::search::{filter, SearchCriteria};
/// use filmbox::Film;
///
/// let films = vec![
///     Film::new(1, "A", "Drama", 1994, 9.3),
///     Film::new(2, "B", "Drama", 2001, 8.0),
///     Film::new(3, "C", "Drama", 1999, 8.8),
/// ];
/// let criteria = SearchCriteria { year: "19".into(), ..Default::default() };
/// let years: Vec<i32> = filter(&films, &criteria).iter().map(|f| f.year).collect();
/// assert_eq!(years, vec![1994, 1999]);
/// ```
#[must_use]
pub fn filter<T: Listing + Clone>(source: &[T], criteria: &SearchCriteria) -> Vec<T> {
    let _span = tracing::debug_span!("search_filter",
        total = source.len(),
        title_len = criteria.title.len(),
        genre = ?criteria.genre,
        year = %criteria.year,
        min_rating = ?criteria.min_rating
    ).entered();

    let result: Vec<T> = source.iter().filter(|item| criteria.matches(*item)).cloned().collect();

    tracing::debug!(matched = result.len(), "search filter applied");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Film;

    fn catalog() -> Vec<Film> {
        vec![
            Film::new(1, "The Shawshank Redemption", "Drama", 1994, 9.3),
            Film::new(2, "The Dark Knight", "Action", 2008, 9.0),
            Film::new(3, "Pulp Fiction", "Crime", 1994, 8.9),
            Film::new(4, "Inception", "Sci-Fi", 2010, 8.8),
            Film::new(5, "Fight Club", "Drama", 1999, 8.8),
        ]
    }

    fn ids(films: &[Film]) -> Vec<i64> {
        films.iter().map(|f| f.id).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        assert_eq!(ids(&filter(&catalog(), &SearchCriteria::default())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let criteria = SearchCriteria { title: "THE".to_string(), ..SearchCriteria::default() };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn genre_match_is_case_insensitive_exact() {
        let criteria = SearchCriteria { genre: Some("drama".to_string()), ..SearchCriteria::default() };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![1, 5]);

        let partial = SearchCriteria { genre: Some("Dram".to_string()), ..SearchCriteria::default() };
        assert!(filter(&catalog(), &partial).is_empty());
    }

    #[test]
    fn year_is_substring_not_range() {
        let criteria = SearchCriteria { year: "0".to_string(), ..SearchCriteria::default() };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![2, 4]);
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        let criteria = SearchCriteria { min_rating: Some(9.0), ..SearchCriteria::default() };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let criteria = SearchCriteria {
            title: "f".to_string(),
            genre: Some("Drama".to_string()),
            year: "199".to_string(),
            min_rating: Some(8.5),
        };
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![5]);
    }

    #[test]
    fn empty_source_yields_empty_result() {
        let none: Vec<Film> = vec![];
        assert!(filter(&none, &SearchCriteria { title: "x".to_string(), ..SearchCriteria::default() }).is_empty());
    }
}
