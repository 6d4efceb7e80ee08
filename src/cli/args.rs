//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cinebase - an in-memory movie catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "cinebase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on; overrides the PORT environment variable
        #[arg(long)]
        port: Option<u16>,

        /// JSON file of movie records to pre-load
        #[arg(long)]
        movies: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
