//! # HTTP Server
//!
//! Assembles the router over a store and configuration, and runs the
//! serving loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::cors::CorsGate;
use crate::observability::Logger;
use crate::store::MovieStore;

use super::config::HttpServerConfig;
use super::movie_routes::{movie_routes, MoviesState};

/// HTTP server for the movie catalog.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server over an empty collection with default configuration.
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), MovieStore::new())
    }

    /// Server over the given store and configuration.
    pub fn with_config(config: HttpServerConfig, store: MovieStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with shared state and request tracing.
    fn build_router(config: &HttpServerConfig, store: MovieStore) -> Router {
        let cors = CorsGate::new(config.allowed_origins.clone());
        let state = Arc::new(MoviesState::new(store, cors));

        movie_routes(state).layer(TraceLayer::new_for_http())
    }

    /// Get the socket address.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr_str = self.config.socket_addr();
        let addr: SocketAddr = addr_str.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", addr_str, e),
            )
        })?;

        Logger::info("SERVER_START", &[("addr", addr_str.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
