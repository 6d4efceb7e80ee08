//! HTTP Server Configuration
//!
//! Host, port, and the CORS origin allow-list. The port can come from
//! the `PORT` environment variable; everything else has fixed
//! defaults.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the listening port.
pub const PORT_VAR: &str = "PORT";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 1234)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins granted cross-origin read/delete access
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    1234
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://localhost:1234".to_string(),
        "https://movies.com".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Config with the port taken from the `PORT` environment
    /// variable, falling back to the default when unset or unparsable.
    pub fn from_env() -> Self {
        let port = std::env::var(PORT_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_port);

        Self {
            port,
            ..Default::default()
        }
    }

    /// Create a new config with the specified port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
