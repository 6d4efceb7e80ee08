//! Schema validation for movie payloads
//!
//! Every write is validated before it reaches the store:
//!
//! - Full payloads (create) must carry every required attribute.
//! - Partial payloads (update) may carry any subset, but each present
//!   attribute must satisfy the same constraint as in full mode.
//! - Unknown attributes are stripped, never stored.
//! - Out-of-range values are rejected, never clamped.
//! - Validation is deterministic and reports every violation found.

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, Violation};
pub use types::{Movie, MoviePatch, NewMovie, MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR};
pub use validator::{validate_movie, validate_partial_movie};
