//! Movie record types
//!
//! Three shapes, one per validation outcome:
//! - `Movie`: a stored record, identifier included.
//! - `NewMovie`: a fully validated create payload, no identifier yet.
//! - `MoviePatch`: a validated partial payload for merge updates.

use serde::{Deserialize, Serialize};

/// Earliest accepted release year (first publicly screened film).
pub const MIN_YEAR: i64 = 1888;
/// Latest accepted release year, leaving room for announced titles.
pub const MAX_YEAR: i64 = 2030;
/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// A stored movie record.
///
/// The identifier is assigned by the store on insert and never changes
/// afterwards. Every stored record has passed full validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: i64,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<String>,
}

/// A fully validated movie payload, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: i64,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<String>,
}

/// A validated partial payload for merge updates.
///
/// Absent attributes stay `None` and are left untouched by the merge.
/// The identifier is not representable here, so a merge can never
/// alter it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
}

impl MoviePatch {
    /// Returns true if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.rating.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
    }
}

impl Movie {
    /// Builds a stored record from a validated payload and a fresh id.
    pub fn from_new(id: impl Into<String>, new: NewMovie) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            rating: new.rating,
            poster: new.poster,
            genre: new.genre,
        }
    }

    /// Merges the present attributes of `patch` onto this record.
    pub fn apply(&mut self, patch: &MoviePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = &patch.director {
            self.director = director.clone();
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(poster) = &patch.poster {
            self.poster = poster.clone();
        }
        if let Some(genre) = &patch.genre {
            self.genre = genre.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewMovie {
        NewMovie {
            title: "Alien".to_string(),
            year: 1979,
            director: "Ridley Scott".to_string(),
            duration: 117,
            rating: 8.5,
            poster: "https://posters.example/alien.jpg".to_string(),
            genre: vec!["Horror".to_string(), "Sci-Fi".to_string()],
        }
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let movie = Movie::from_new("m1", sample_new());
        assert_eq!(movie.id, "m1");
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.genre.len(), 2);
    }

    #[test]
    fn test_apply_merges_present_fields_only() {
        let mut movie = Movie::from_new("m1", sample_new());
        let patch = MoviePatch {
            rating: Some(9.0),
            ..Default::default()
        };

        movie.apply(&patch);

        assert_eq!(movie.rating, 9.0);
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.year, 1979);
        assert_eq!(movie.id, "m1");
    }

    #[test]
    fn test_empty_patch_is_a_noop() {
        let mut movie = Movie::from_new("m1", sample_new());
        let before = movie.clone();

        let patch = MoviePatch::default();
        assert!(patch.is_empty());

        movie.apply(&patch);
        assert_eq!(movie, before);
    }

    #[test]
    fn test_movie_round_trips_through_json() {
        let movie = Movie::from_new("m1", sample_new());
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(movie, back);
    }
}
