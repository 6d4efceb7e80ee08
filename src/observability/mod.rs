//! Observability for cinebase
//!
//! Structured one-line JSON logging with deterministic key order.
//! Request-level tracing is handled separately by the tower-http
//! layer on the router.

mod logger;

pub use logger::{Logger, Severity};
