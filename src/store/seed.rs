//! Seed loading for the pre-built movie collection
//!
//! The collection ships as a JSON file of full records. Each record is
//! run through full validation before it may enter the store, so the
//! stored-records-satisfy-the-schema invariant holds from boot.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::{validate_movie, Movie, ValidationError};

/// Errors while loading a seed file. All are boot-fatal.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not a JSON array.
    #[error("seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record has no non-empty string `id`.
    #[error("seed record {0} has no usable id")]
    MissingId(usize),

    /// A record fails full validation.
    #[error("seed record {index} is invalid: {source}")]
    Invalid {
        index: usize,
        source: ValidationError,
    },
}

/// Loads and validates seed records from a JSON file.
///
/// Record order in the file becomes insertion order in the store.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<Value> = serde_json::from_str(&content)?;

    let mut movies = Vec::with_capacity(raw.len());
    for (index, record) in raw.iter().enumerate() {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or(SeedError::MissingId(index))?;

        let new = validate_movie(record).map_err(|source| SeedError::Invalid { index, source })?;
        movies.push(Movie::from_new(id, new));
    }

    Ok(movies)
}
