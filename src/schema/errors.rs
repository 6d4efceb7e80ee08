//! Validation failure types
//!
//! A failed validation is a value, not a panic: the result carries one
//! `Violation` per constraint the payload broke, and the list is what
//! clients receive as the 400 body.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Attribute that failed, e.g. "rating" or "genre[1]".
    pub field: String,
    /// The constraint that was expected to hold.
    pub expected: String,
    /// What the payload actually carried.
    pub actual: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "attribute to be present", "missing")
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(field, expected, actual)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Validation failure carrying every violation found in the payload.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("payload failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true if any violation references the given attribute.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field.starts_with(field))
    }
}
