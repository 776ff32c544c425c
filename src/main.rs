//! Codify CLI binary
//!
//! This is the main entry point for the codify command-line interface.
//! The CLI is a thin adapter over existing APIs - NO logic is implemented here.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = codify::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    // Execute command
    let result = match cli.command {
        codify::cli::Commands::Ingest {
            source,
            db,
            jurisdiction,
            start_at,
            run_id,
        } => execute_ingest(&source, &db, jurisdiction.as_deref(), start_at, run_id),

        codify::cli::Commands::Stats { db } => execute_stats(&db),
    };

    // Handle result
    match result {
        Ok(msg) => {
            println!("{}", msg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Execute the ingest command.
///
/// This function is a thin adapter that:
/// 1. Loads the jurisdiction profile (or the built-in default)
/// 2. Opens the store and enumerates the document source
/// 3. Feeds each document through the orchestrator
///
/// Malformed documents and unreadable files are logged and skipped;
/// a storage failure aborts the run with the last good offset in the
/// message so the caller can resume with `--start-at`.
fn execute_ingest(
    source_dir: &Path,
    db_path: &Path,
    profile_path: Option<&Path>,
    start_at: usize,
    run_id: Option<String>,
) -> Result<String, codify::CodifyError> {
    use codify::jurisdiction::Jurisdiction;
    use codify::source::{DirectorySource, DocumentSource};
    use codify::{CodifyError, Ingestor, LawStore};

    let run_id = run_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    // Step 1: Load the jurisdiction profile
    let jurisdiction = match profile_path {
        Some(path) => Jurisdiction::from_file(path)?,
        None => Jurisdiction::default(),
    };

    // Step 2: Open the store and the document source
    let store = LawStore::open(db_path)?;
    let mut ingestor = Ingestor::new(store, jurisdiction)?;
    let mut source = DirectorySource::new(source_dir)?.start_at(start_at);

    log::info!(
        "run {}: ingesting from {} (resuming at offset {})",
        run_id,
        source_dir.display(),
        start_at
    );

    // Step 3: Drive the pipeline
    let mut ingested = 0usize;
    let mut skipped = 0usize;
    let mut offset = start_at;

    loop {
        let entry = match source.next_document() {
            Ok(None) => break,
            Ok(Some(entry)) => entry,
            Err(CodifyError::InvalidDocumentJson { path, message }) => {
                log::warn!("run {}: skipping {}: {}", run_id, path.display(), message);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match ingestor.ingest(&entry.document) {
            Ok(law_id) => {
                ingested += 1;
                offset = entry.index + 1;
                log::debug!(
                    "run {}: {} -> law {}",
                    run_id,
                    entry.path.display(),
                    law_id
                );
            }
            Err(CodifyError::MalformedDocument { section, reason }) => {
                log::warn!(
                    "run {}: skipping malformed document {} ('{}'): {}",
                    run_id,
                    entry.path.display(),
                    section,
                    reason
                );
                skipped += 1;
            }
            Err(e) => {
                // Committed documents stay committed; report where to
                // resume.
                return Err(codify::CodifyError::Other(format!(
                    "run {} aborted at {} ({}); resume with --start-at {}",
                    run_id,
                    entry.path.display(),
                    e,
                    offset
                )));
            }
        }
    }

    Ok(format!(
        "Ingested {} documents ({} skipped) into {}",
        ingested,
        skipped,
        db_path.display()
    ))
}

/// Execute the stats command.
fn execute_stats(db_path: &Path) -> Result<String, codify::CodifyError> {
    use codify::LawStore;

    let store = LawStore::open(db_path)?;
    let counts = store.counts()?;

    Ok(format!(
        "structure: {}\nlaws: {}\ntext blocks: {}\nreferences: {}\ndefinitions: {}",
        counts.structure, counts.laws, counts.text_blocks, counts.references, counts.definitions
    ))
}
