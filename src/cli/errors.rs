//! CLI-specific error types
//!
//! All CLI errors abort the process with a non-zero exit before the
//! server accepts a request.

use thiserror::Error;

use crate::store::SeedError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors from CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Movie seed file could not be loaded.
    #[error("failed to load movies: {0}")]
    Seed(#[from] SeedError),

    /// Async runtime could not be created.
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),

    /// Server terminated with an error.
    #[error("server failed: {0}")]
    Server(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_errors_convert() {
        let seed_err = SeedError::MissingId(3);
        let cli_err = CliError::from(seed_err);
        assert!(cli_err.to_string().contains("failed to load movies"));
        assert!(cli_err.to_string().contains("3"));
    }
}
