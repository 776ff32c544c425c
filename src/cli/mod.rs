//! Command-line interface for Codify.
//!
//! This module handles argument parsing and user interface only.
//! NO logic or database operations are performed here.

use clap::Parser;

/// Codify: legal-code ingestion and normalization kernel.
#[derive(Parser, Debug)]
#[command(name = "codify")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available Codify commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Ingest a directory of raw law documents into the store.
    Ingest {
        /// Directory containing the raw documents (one JSON file per
        /// law).
        #[arg(short, long)]
        source: std::path::PathBuf,

        /// Path to the SQLite database (created if absent).
        #[arg(short, long)]
        db: std::path::PathBuf,

        /// Optional jurisdiction profile JSON (defaults to the built-in
        /// Virginia profile).
        #[arg(short, long)]
        jurisdiction: Option<std::path::PathBuf>,

        /// Resume from this document offset (number of documents
        /// already ingested in a previous run).
        #[arg(long, default_value_t = 0)]
        start_at: usize,

        /// Optional run ID for log correlation (auto-generated UUID if
        /// not provided).
        #[arg(long)]
        run_id: Option<String>,
    },

    /// Print row counts for an existing store.
    Stats {
        /// Path to the SQLite database.
        #[arg(short, long)]
        db: std::path::PathBuf,
    },
}

/// Parse command-line arguments.
///
/// This function is the entry point for CLI argument parsing.
/// It returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}
