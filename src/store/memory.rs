//! The in-memory record collection

use std::sync::RwLock;

use uuid::Uuid;

use crate::schema::{Movie, MoviePatch, NewMovie};

use super::errors::{StoreError, StoreResult};

/// In-memory, insertion-ordered collection of movie records.
///
/// Identifiers are random UUIDs assigned on insert. The collection is
/// guarded by a single lock, and every operation acquires it exactly
/// once for its whole read-modify-write, so the collection is never
/// observed in a torn state.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-loaded with validated records, order
    /// preserved.
    pub fn from_records(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Returns all records in insertion order, optionally keeping only
    /// those whose genre list contains a case-insensitive match.
    pub fn list(&self, genre: Option<&str>) -> StoreResult<Vec<Movie>> {
        let movies = self.movies.read().map_err(|_| StoreError::LockPoisoned)?;

        match genre {
            Some(genre) => {
                let wanted = genre.to_lowercase();
                Ok(movies
                    .iter()
                    .filter(|m| m.genre.iter().any(|g| g.to_lowercase() == wanted))
                    .cloned()
                    .collect())
            }
            None => Ok(movies.clone()),
        }
    }

    /// Returns the record with the given identifier.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Movie> {
        let movies = self.movies.read().map_err(|_| StoreError::LockPoisoned)?;

        movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Assigns a fresh random identifier, appends the record to the
    /// end of the collection, and returns the stored value.
    pub fn insert(&self, new: NewMovie) -> StoreResult<Movie> {
        let movie = Movie::from_new(Uuid::new_v4().to_string(), new);

        let mut movies = self.movies.write().map_err(|_| StoreError::LockPoisoned)?;
        movies.push(movie.clone());

        Ok(movie)
    }

    /// Merges the patch onto the record with the given identifier and
    /// returns the updated value. The identifier is never altered.
    pub fn update(&self, id: &str, patch: &MoviePatch) -> StoreResult<Movie> {
        let mut movies = self.movies.write().map_err(|_| StoreError::LockPoisoned)?;

        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;

        movie.apply(patch);
        Ok(movie.clone())
    }

    /// Removes the record with the given identifier, shifting
    /// subsequent records forward.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut movies = self.movies.write().map_err(|_| StoreError::LockPoisoned)?;

        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;

        movies.remove(index);
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.movies.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
