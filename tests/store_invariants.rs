//! Store and Validation Invariant Tests
//!
//! Invariants under test:
//! - Insert assigns a fresh identifier distinct from every existing one
//! - Not-found lookups and mutations leave the collection unchanged
//! - Listing is idempotent and keeps insertion order
//! - Genre filtering matches iff the genre list contains a
//!   case-insensitive equal element
//! - Partial update obeys the merge law; the identifier is immune
//! - Seeded records pass full validation before entering the store

use std::collections::HashSet;
use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use cinebase::schema::{validate_movie, validate_partial_movie, Movie, NewMovie};
use cinebase::store::{load_movies, MovieStore, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn payload(title: &str, genres: &[&str]) -> serde_json::Value {
    json!({
        "title": title,
        "year": 2005,
        "director": "Someone",
        "duration": 120,
        "rating": 7.2,
        "poster": "https://posters.example/p.jpg",
        "genre": genres
    })
}

fn validated(title: &str, genres: &[&str]) -> NewMovie {
    validate_movie(&payload(title, genres)).unwrap()
}

fn seeded_store(count: usize) -> MovieStore {
    let store = MovieStore::new();
    for i in 0..count {
        store.insert(validated(&format!("Movie {}", i), &[])).unwrap();
    }
    store
}

// =============================================================================
// Insert
// =============================================================================

/// insert(validate(P)) keeps P's fields and assigns a fresh id.
#[test]
fn test_insert_of_validated_payload_keeps_fields() {
    let store = MovieStore::new();
    let new = validated("Heat", &["Crime", "Drama"]);

    let stored = store.insert(new.clone()).unwrap();

    assert_eq!(stored.title, new.title);
    assert_eq!(stored.year, new.year);
    assert_eq!(stored.director, new.director);
    assert_eq!(stored.duration, new.duration);
    assert_eq!(stored.rating, new.rating);
    assert_eq!(stored.poster, new.poster);
    assert_eq!(stored.genre, new.genre);
    assert!(!stored.id.is_empty());
}

#[test]
fn test_inserted_ids_are_unique_across_the_collection() {
    let store = MovieStore::new();

    let mut ids = HashSet::new();
    for i in 0..100 {
        let stored = store.insert(validated(&format!("M{}", i), &[])).unwrap();
        assert!(ids.insert(stored.id), "duplicate identifier assigned");
    }
}

// =============================================================================
// Not-Found Leaves State Unchanged
// =============================================================================

#[test]
fn test_not_found_operations_do_not_mutate() {
    let store = seeded_store(3);
    let before = store.list(None).unwrap();

    assert_eq!(store.get_by_id("absent"), Err(StoreError::NotFound));

    let patch = validate_partial_movie(&json!({"title": "X"})).unwrap();
    assert_eq!(store.update("absent", &patch), Err(StoreError::NotFound));

    assert_eq!(store.delete("absent"), Err(StoreError::NotFound));

    let after = store.list(None).unwrap();
    assert_eq!(before, after);
}

// =============================================================================
// Listing
// =============================================================================

/// Repeated list() calls with no intervening mutation are identical.
#[test]
fn test_list_is_idempotent() {
    let store = seeded_store(5);

    let first = store.list(None).unwrap();
    for _ in 0..10 {
        assert_eq!(store.list(None).unwrap(), first);
    }
}

/// A record appears in a filtered listing iff its genre list contains
/// a case-insensitive match.
#[test]
fn test_genre_filter_membership() {
    let store = MovieStore::new();
    let sci_fi = store.insert(validated("A", &["Sci-Fi", "Drama"])).unwrap();
    let comedy = store.insert(validated("B", &["Comedy"])).unwrap();

    for query in ["Sci-Fi", "sci-fi", "SCI-FI"] {
        let hits = store.list(Some(query)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, sci_fi.id);
    }

    let hits = store.list(Some("comedy")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, comedy.id);

    // no substring matching: "Sci" is not a genre of either record
    assert!(store.list(Some("Sci")).unwrap().is_empty());
}

// =============================================================================
// Partial Update Merge Law
// =============================================================================

/// update(id, {k: v}) changes exactly field k; the id survives even a
/// payload that carries one.
#[test]
fn test_merge_law_single_field() {
    let store = MovieStore::new();
    let stored = store.insert(validated("Original", &["Drama"])).unwrap();

    let patch = validate_partial_movie(&json!({"duration": 141})).unwrap();
    store.update(&stored.id, &patch).unwrap();

    let fetched = store.get_by_id(&stored.id).unwrap();
    let expected = Movie {
        duration: 141,
        ..stored
    };
    assert_eq!(fetched, expected);
}

#[test]
fn test_merge_ignores_client_sent_id() {
    let store = MovieStore::new();
    let stored = store.insert(validated("Original", &[])).unwrap();

    let patch = validate_partial_movie(&json!({"id": "hijacked", "year": 1999})).unwrap();
    let updated = store.update(&stored.id, &patch).unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.year, 1999);
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn test_seeded_store_preserves_file_order() {
    let mut file = NamedTempFile::new().unwrap();
    let records = json!([
        {"id": "s1", "title": "First", "year": 1990, "director": "D",
         "duration": 100, "rating": 6.0, "poster": "http://x/1.jpg", "genre": ["Drama"]},
        {"id": "s2", "title": "Second", "year": 1991, "director": "D",
         "duration": 100, "rating": 6.5, "poster": "http://x/2.jpg", "genre": ["Drama"]}
    ]);
    file.write_all(records.to_string().as_bytes()).unwrap();

    let store = MovieStore::from_records(load_movies(file.path()).unwrap());

    let titles: Vec<String> = store
        .list(None)
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert_eq!(store.get_by_id("s2").unwrap().title, "Second");
}
