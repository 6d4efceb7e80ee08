//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{load_movies, MovieStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point.
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args.
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port, movies } => serve(port, movies.as_deref()),
    }
}

/// Build the store, then block on the serving loop.
///
/// Port precedence: --port flag, then the PORT environment variable,
/// then the documented default (1234).
fn serve(port: Option<u16>, movies: Option<&Path>) -> CliResult<()> {
    let mut config = HttpServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    let store = match movies {
        Some(path) => MovieStore::from_records(load_movies(path)?),
        None => MovieStore::new(),
    };

    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(async { server.start().await.map_err(CliError::Server) })
}
