//! Document Source: raw documents from the filesystem.
//!
//! Supplies raw documents one at a time in a stable iteration order and
//! supports resuming from an arbitrary offset after interruption. The
//! caller is responsible for persisting the offset of the last fully
//! ingested document; this module only reports positions.

use crate::document::RawDocument;
use crate::error::{CodifyError, Result};
use std::path::{Path, PathBuf};

/// A source of raw documents in a stable order.
pub trait DocumentSource {
    /// Yield the next document, or `None` when the source is exhausted.
    fn next_document(&mut self) -> Result<Option<SourcedDocument>>;
}

/// One document yielded by a source, with its position for resumption.
#[derive(Debug, Clone)]
pub struct SourcedDocument {
    /// Zero-based position of the document within the source's
    /// iteration order.
    pub index: usize,

    /// The file the document came from.
    pub path: PathBuf,

    /// The deserialized document.
    pub document: RawDocument,
}

/// Directory-backed source: every `*.json` file in one directory, in
/// sorted path order.
pub struct DirectorySource {
    files: Vec<PathBuf>,
    cursor: usize,
}

impl DirectorySource {
    /// Enumerate the documents under `dir`.
    pub fn new(dir: &Path) -> Result<Self> {
        let pattern = dir.join("*.json");
        let pattern = pattern.to_string_lossy();

        let mut files = Vec::new();
        let paths = glob::glob(&pattern)
            .map_err(|e| CodifyError::Other(format!("invalid source pattern '{}': {}", pattern, e)))?;
        for entry in paths {
            let path = entry
                .map_err(|e| CodifyError::Other(format!("unreadable source entry: {}", e)))?;
            files.push(path);
        }

        // Sorted paths give the stable iteration order resumption
        // depends on.
        files.sort();

        Ok(DirectorySource { files, cursor: 0 })
    }

    /// Resume iteration from `offset` (the number of documents already
    /// ingested).
    pub fn start_at(mut self, offset: usize) -> Self {
        self.cursor = offset;
        self
    }

    /// Total number of documents in the source.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the source holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DocumentSource for DirectorySource {
    fn next_document(&mut self) -> Result<Option<SourcedDocument>> {
        let Some(path) = self.files.get(self.cursor).cloned() else {
            return Ok(None);
        };

        let index = self.cursor;
        self.cursor += 1;

        let document = RawDocument::from_file(&path)?;
        Ok(Some(SourcedDocument {
            index,
            path,
            document,
        }))
    }
}
