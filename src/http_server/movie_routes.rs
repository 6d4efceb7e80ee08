//! Movie HTTP Routes
//!
//! Route handlers compose the CORS gate, the payload validator, and
//! the movie store. Each handler is a function of (request parts,
//! shared state), so tests drive the router directly without a
//! listening socket.
//!
//! Validation runs before any store access; a validation failure
//! short-circuits the request.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::cors::CorsGate;
use crate::observability::Logger;
use crate::schema::{validate_movie, validate_partial_movie, Movie};
use crate::store::MovieStore;

use super::errors::{ApiError, ApiResult, MessageBody};

// ==================
// Shared State
// ==================

/// State shared across movie handlers.
pub struct MoviesState {
    pub store: MovieStore,
    pub cors: CorsGate,
}

impl MoviesState {
    pub fn new(store: MovieStore, cors: CorsGate) -> Self {
        Self { store, cors }
    }
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub genre: Option<String>,
}

// ==================
// Movie Routes
// ==================

/// Create the movie router.
pub fn movie_routes(state: Arc<MoviesState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies_handler).post(create_movie_handler))
        .route(
            "/movies/{id}",
            get(get_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler)
                .options(preflight_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Declared origin of the request, if any.
fn origin_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ORIGIN).and_then(|v| v.to_str().ok())
}

/// Attaches Access-Control-Allow-Origin when the gate grants it.
fn grant_simple_origin(state: &MoviesState, headers: &HeaderMap, response: &mut Response) {
    if let Some(origin) = state.cors.simple_origin(origin_header(headers)) {
        if let Ok(value) = HeaderValue::from_str(origin) {
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }
}

// ==================
// Handlers
// ==================

async fn list_movies_handler(
    State(state): State<Arc<MoviesState>>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let movies = state.store.list(query.genre.as_deref())?;

    let mut response = Json(movies).into_response();
    grant_simple_origin(&state, &headers, &mut response);
    Ok(response)
}

async fn get_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.store.get_by_id(&id)?;
    Ok(Json(movie))
}

async fn create_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let new = match validate_movie(&payload) {
        Ok(new) => new,
        Err(err) => {
            let count = err.violations.len().to_string();
            Logger::warn(
                "VALIDATION_REJECTED",
                &[("operation", "create"), ("violations", count.as_str())],
            );
            return Err(err.into());
        }
    };

    let movie = state.store.insert(new)?;
    Logger::info("MOVIE_CREATED", &[("id", movie.id.as_str())]);

    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Movie>> {
    let patch = match validate_partial_movie(&payload) {
        Ok(patch) => patch,
        Err(err) => {
            let count = err.violations.len().to_string();
            Logger::warn(
                "VALIDATION_REJECTED",
                &[("operation", "update"), ("violations", count.as_str())],
            );
            return Err(err.into());
        }
    };

    let movie = state.store.update(&id, &patch)?;
    Logger::info("MOVIE_UPDATED", &[("id", movie.id.as_str())]);

    Ok(Json(movie))
}

/// Delete attaches the CORS header on both outcomes, so a cross-origin
/// caller can read the 404 body as well as the confirmation.
async fn delete_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut response = match state.store.delete(&id) {
        Ok(()) => {
            Logger::info("MOVIE_DELETED", &[("id", id.as_str())]);
            Json(MessageBody::new("Movie deleted")).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    };

    grant_simple_origin(&state, &headers, &mut response);
    response
}

/// CORS preflight. Never reaches the store.
async fn preflight_handler(State(state): State<Arc<MoviesState>>, headers: HeaderMap) -> Response {
    let mut response = StatusCode::OK.into_response();

    if let Some(grant) = state.cors.preflight(origin_header(&headers)) {
        if let Ok(value) = HeaderValue::from_str(&grant.origin) {
            let response_headers = response.headers_mut();
            response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            response_headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(grant.methods),
            );
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let state = Arc::new(MoviesState::new(
            MovieStore::new(),
            CorsGate::new(vec!["https://movies.com".to_string()]),
        ));
        let _router = movie_routes(state);
    }

    #[test]
    fn test_origin_header_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(origin_header(&headers), None);

        headers.insert(header::ORIGIN, HeaderValue::from_static("https://movies.com"));
        assert_eq!(origin_header(&headers), Some("https://movies.com"));
    }
}
