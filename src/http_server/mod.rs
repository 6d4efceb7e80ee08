//! # HTTP serving for the movie catalog
//!
//! Route dispatch, payload validation, store access, and CORS headers
//! composed into one axum router.
//!
//! # Endpoints
//!
//! - `GET /movies` - list, optionally filtered by `?genre=`
//! - `GET /movies/{id}` - single record
//! - `POST /movies` - create (full payload)
//! - `PATCH /movies/{id}` - partial update (merge)
//! - `DELETE /movies/{id}` - remove
//! - `OPTIONS /movies/{id}` - CORS preflight

pub mod config;
pub mod errors;
pub mod movie_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use movie_routes::{movie_routes, ListQuery, MoviesState};
pub use server::HttpServer;
