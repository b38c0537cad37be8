//! Property tests for the store and query invariants.

use chrono::{DateTime, Utc};
use filmbox::query::search::{filter, SearchCriteria};
use filmbox::storage::{MemoryStore, NOTES_KEY};
use filmbox::{FavoritesStore, Film, FilmNote, NoteDraft, NotePatch, NoteRating, NotesStore};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_film() -> impl Strategy<Value = Film> {
    (0i64..20, "[A-Za-z ]{0,12}", prop::sample::select(vec!["Drama", "Crime", "Sci-Fi"]), 1950i32..2025, 0.0f64..=10.0)
        .prop_map(|(id, title, genre, year, rating)| Film::new(id, title, genre, year, rating))
}

fn arb_rating() -> impl Strategy<Value = Option<NoteRating>> {
    prop::option::of((1i64..=5).prop_map(|r| NoteRating::new(r).unwrap()))
}

fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800_000).prop_map(|ms| DateTime::from_timestamp_millis(ms).unwrap())
}

fn arb_note() -> impl Strategy<Value = FilmNote> {
    (
        any::<u64>(),
        ".*",
        any::<i64>(),
        ".*",
        arb_rating(),
        prop::collection::vec("\\PC{0,10}", 0..4),
        arb_timestamp(),
        arb_timestamp(),
    )
        .prop_map(|(id, film_title, film_id, note, rating, tags, created_at, updated_at)| FilmNote {
            id: id.to_string(),
            film_title,
            film_id,
            note,
            rating,
            tags,
            created_at,
            updated_at,
        })
}

proptest! {
    #[test]
    fn favorites_hold_one_entry_per_film(films in prop::collection::vec(arb_film(), 0..30)) {
        let mut favorites = FavoritesStore::new();
        for film in &films {
            favorites.add(film);
        }

        let distinct: HashSet<i64> = films.iter().map(|f| f.id).collect();
        prop_assert_eq!(favorites.len(), distinct.len());
        for id in distinct {
            prop_assert!(favorites.contains(id));
        }
    }

    #[test]
    fn toggling_twice_restores_membership(films in prop::collection::vec(arb_film(), 1..10), pick in any::<prop::sample::Index>()) {
        let mut favorites = FavoritesStore::new();
        for film in films.iter().skip(1) {
            favorites.add(film);
        }
        let film = pick.get(&films);
        let before = favorites.contains(film.id);

        prop_assert_eq!(favorites.toggle(film), !before);
        prop_assert_eq!(favorites.toggle(film), before);
        prop_assert_eq!(favorites.contains(film.id), before);
    }

    #[test]
    fn min_rating_filter_is_exact(films in prop::collection::vec(arb_film(), 0..30), min in 0.0f64..=10.0) {
        let criteria = SearchCriteria { min_rating: Some(min), ..SearchCriteria::default() };
        let result = filter(&films, &criteria);

        prop_assert!(result.iter().all(|f| f.rating >= min));
        let expected = films.iter().filter(|f| f.rating >= min).count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn notes_collection_survives_serialization(notes in prop::collection::vec(arb_note(), 0..8)) {
        let json = serde_json::to_string(&notes).unwrap();
        let parsed: Vec<FilmNote> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, notes);
    }

    #[test]
    fn identity_patch_only_moves_updated_at(
        title in "[A-Za-z]{1,10}",
        text in "[a-z ]{1,20}",
        rating in arb_rating(),
        tags in prop::collection::vec("[A-Za-z]{1,6}", 0..3),
    ) {
        let mut store = NotesStore::load(MemoryStore::default(), NOTES_KEY);
        let before = store
            .add(NoteDraft { film_title: title, film_id: 3, note: text, rating, tags })
            .unwrap()
            .clone();

        let after = store.update(&before.id, NotePatch::from_note(&before)).unwrap().unwrap().clone();

        prop_assert!(after.updated_at > before.updated_at);
        prop_assert_eq!(FilmNote { updated_at: before.updated_at, ..after }, before);
    }
}
