//! Store error types

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record with the requested identifier exists.
    #[error("Movie Not Found")]
    NotFound,

    /// The collection lock was poisoned by a panicking writer.
    #[error("movie collection lock poisoned")]
    LockPoisoned,
}
