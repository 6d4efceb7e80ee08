//! Payload validation for create and update requests
//!
//! Validation semantics:
//! - Full mode: every required attribute present and individually
//!   valid; unknown attributes stripped; absent genre defaults to the
//!   empty list; a single text genre normalizes to a one-element list.
//! - Partial mode: each present attribute must satisfy its constraint;
//!   absent attributes are left out of the result so the caller can
//!   merge; unknown attributes are ignored.
//!
//! Validation is pure and deterministic. The same payload always
//! produces the same result, every violation in the payload is
//! reported, and the input is never mutated.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::errors::{ValidationError, Violation};
use super::types::{MoviePatch, NewMovie, MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR};

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+$").expect("url pattern compiles"))
}

/// Returns the JSON type name for violation messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn non_empty_text(field: &str, value: &Value) -> Result<String, Violation> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(Violation::new(field, "non-empty text", "empty string")),
        None => Err(Violation::type_mismatch(
            field,
            "string",
            json_type_name(value),
        )),
    }
}

fn year_in_range(field: &str, value: &Value) -> Result<i64, Violation> {
    match value.as_i64() {
        Some(n) if (MIN_YEAR..=MAX_YEAR).contains(&n) => Ok(n),
        Some(n) => Err(Violation::new(
            field,
            format!("integer between {} and {}", MIN_YEAR, MAX_YEAR),
            n.to_string(),
        )),
        None => Err(Violation::type_mismatch(
            field,
            "integer",
            json_type_name(value),
        )),
    }
}

fn positive_int(field: &str, value: &Value) -> Result<i64, Violation> {
    match value.as_i64() {
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(Violation::new(field, "positive integer", n.to_string())),
        None => Err(Violation::type_mismatch(
            field,
            "integer",
            json_type_name(value),
        )),
    }
}

fn rating_in_range(field: &str, value: &Value) -> Result<f64, Violation> {
    match value.as_f64() {
        Some(x) if (MIN_RATING..=MAX_RATING).contains(&x) => Ok(x),
        Some(x) => Err(Violation::new(
            field,
            format!("number between {} and {}", MIN_RATING, MAX_RATING),
            x.to_string(),
        )),
        None => Err(Violation::type_mismatch(
            field,
            "number",
            json_type_name(value),
        )),
    }
}

fn url_text(field: &str, value: &Value) -> Result<String, Violation> {
    match value.as_str() {
        Some(s) if url_pattern().is_match(s) => Ok(s.to_string()),
        Some(s) => Err(Violation::new(field, "http(s) URL", s)),
        None => Err(Violation::type_mismatch(
            field,
            "string",
            json_type_name(value),
        )),
    }
}

/// Validates a genre value, normalizing a single text value into a
/// one-element list. Returns None if any violation was recorded.
fn genre_list(field: &str, value: &Value, violations: &mut Vec<Violation>) -> Option<Vec<String>> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(vec![s.clone()]),
        Value::String(_) => {
            violations.push(Violation::new(field, "non-empty text", "empty string"));
            None
        }
        Value::Array(items) => {
            let mut genres = Vec::with_capacity(items.len());
            let mut valid = true;
            for (i, item) in items.iter().enumerate() {
                match non_empty_text(&format!("{}[{}]", field, i), item) {
                    Ok(genre) => genres.push(genre),
                    Err(violation) => {
                        violations.push(violation);
                        valid = false;
                    }
                }
            }
            valid.then_some(genres)
        }
        other => {
            violations.push(Violation::type_mismatch(
                field,
                "list of text values",
                json_type_name(other),
            ));
            None
        }
    }
}

/// Runs `check` on a required attribute, recording a violation when
/// the attribute is missing or invalid.
fn required<T>(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
    check: impl Fn(&str, &Value) -> Result<T, Violation>,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => match check(field, value) {
            Ok(checked) => Some(checked),
            Err(violation) => {
                violations.push(violation);
                None
            }
        },
        None => {
            violations.push(Violation::missing(field));
            None
        }
    }
}

/// Runs `check` on an attribute that may be absent. Absence is not a
/// violation; an invalid present value is.
fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
    check: impl Fn(&str, &Value) -> Result<T, Violation>,
) -> Option<T> {
    let value = obj.get(field)?;
    match check(field, value) {
        Ok(checked) => Some(checked),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

fn root_violation(payload: &Value) -> ValidationError {
    ValidationError::new(vec![Violation::type_mismatch(
        "$root",
        "object",
        json_type_name(payload),
    )])
}

/// Validates a full payload for create.
///
/// Unknown attributes (including a client-supplied `id`) are stripped
/// by construction: only the declared attributes are read out of the
/// payload.
pub fn validate_movie(payload: &Value) -> Result<NewMovie, ValidationError> {
    let Some(obj) = payload.as_object() else {
        return Err(root_violation(payload));
    };

    let mut violations = Vec::new();

    let title = required(obj, "title", &mut violations, non_empty_text);
    let year = required(obj, "year", &mut violations, year_in_range);
    let director = required(obj, "director", &mut violations, non_empty_text);
    let duration = required(obj, "duration", &mut violations, positive_int);
    let rating = required(obj, "rating", &mut violations, rating_in_range);
    let poster = required(obj, "poster", &mut violations, url_text);
    let genre = match obj.get("genre") {
        Some(value) => genre_list("genre", value, &mut violations),
        None => Some(Vec::new()),
    };

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    match (title, year, director, duration, rating, poster, genre) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rating),
            Some(poster),
            Some(genre),
        ) => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            rating,
            poster,
            genre,
        }),
        // Unreachable: every None above pushed a violation.
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validates a partial payload for merge updates.
///
/// Absent attributes stay out of the patch entirely. Unknown
/// attributes are ignored, so a client-sent `id` cannot reach the
/// merge.
pub fn validate_partial_movie(payload: &Value) -> Result<MoviePatch, ValidationError> {
    let Some(obj) = payload.as_object() else {
        return Err(root_violation(payload));
    };

    let mut violations = Vec::new();

    let patch = MoviePatch {
        title: optional(obj, "title", &mut violations, non_empty_text),
        year: optional(obj, "year", &mut violations, year_in_range),
        director: optional(obj, "director", &mut violations, non_empty_text),
        duration: optional(obj, "duration", &mut violations, positive_int),
        rating: optional(obj, "rating", &mut violations, rating_in_range),
        poster: optional(obj, "poster", &mut violations, url_text),
        genre: match obj.get("genre") {
            Some(value) => genre_list("genre", value, &mut violations),
            None => None,
        },
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(violations))
    }
}
