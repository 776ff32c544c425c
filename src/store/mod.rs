//! SQLite store for the normalized code.
//!
//! [`LawStore`] owns the connection and creates the schema; the write
//! helpers take a plain `&Connection` so the orchestrator can run them
//! inside one per-document transaction. Components that need storage
//! receive that capability explicitly; there is no ambient handle.

pub mod schema;

use crate::error::Result;
use crate::parse::{NormalizedDocument, TextSegment};
use chrono::Utc;
use rusqlite::{params, Connection, Transaction};
use std::path::Path;

/// Store handle wrapping the SQLite connection.
pub struct LawStore {
    conn: Connection,
}

impl LawStore {
    /// Open (or create) a store at the given path and ensure the schema
    /// exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = LawStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = LawStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    /// Begin a transaction. The orchestrator wraps each document's
    /// persistence in one so a storage failure rolls back the document
    /// as a whole.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Borrow the underlying connection for queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Row counts per table, for the `stats` command and tests.
    pub fn counts(&self) -> Result<StoreCounts> {
        let count = |table: &str| -> Result<i64> {
            let sql = format!("SELECT COUNT(*) FROM {}", table);
            Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
        };

        Ok(StoreCounts {
            structure: count("structure")?,
            laws: count("laws")?,
            text_blocks: count("text_blocks")?,
            references: count("laws_references")?,
            definitions: count("dictionary")?,
        })
    }
}

/// Row counts across the store's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    /// Structural nodes.
    pub structure: i64,
    /// Law documents.
    pub laws: i64,
    /// Text segments.
    pub text_blocks: i64,
    /// Cross-reference rows.
    pub references: i64,
    /// Defined terms.
    pub definitions: i64,
}

/// Insert or refresh the document header row, keyed by section number.
///
/// Re-ingesting a section updates the stored header and text in place so
/// the document keeps its id across runs (references and definitions
/// hang off that id).
pub fn upsert_law(
    conn: &Connection,
    structure_id: Option<i64>,
    doc: &NormalizedDocument,
) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO laws (structure_id, catch_line, section, text, order_by, history, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(section) DO UPDATE SET
             structure_id = excluded.structure_id,
             catch_line = excluded.catch_line,
             text = excluded.text,
             order_by = excluded.order_by,
             history = excluded.history
         RETURNING id",
        params![
            structure_id,
            doc.catch_line,
            doc.section_number,
            doc.full_text,
            doc.order_by,
            doc.history,
            Utc::now(),
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Delete a law's text segments and their prefix rows, ahead of a
/// re-insert. Makes segment persistence idempotent across re-ingestion.
pub fn clear_segments(conn: &Connection, law_id: i64) -> Result<()> {
    conn.execute(
        "DELETE FROM text_block_prefixes
         WHERE text_block_id IN (SELECT id FROM text_blocks WHERE law_id = ?1)",
        params![law_id],
    )?;
    conn.execute("DELETE FROM text_blocks WHERE law_id = ?1", params![law_id])?;
    Ok(())
}

/// Insert one text segment and its prefix-hierarchy tokens.
///
/// A segment without a declared type is stored as a plain "section".
pub fn insert_segment(conn: &Connection, law_id: i64, segment: &TextSegment) -> Result<i64> {
    conn.execute(
        "INSERT INTO text_blocks (law_id, sequence, text, type, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            law_id,
            segment.sequence,
            segment.text,
            segment.kind.as_deref().unwrap_or("section"),
            Utc::now(),
        ],
    )?;
    let text_block_id = conn.last_insert_rowid();

    for (i, identifier) in segment.prefix_hierarchy.iter().enumerate() {
        conn.execute(
            "INSERT INTO text_block_prefixes (text_block_id, identifier, sequence)
             VALUES (?1, ?2, ?3)",
            params![text_block_id, identifier, (i + 1) as i64],
        )?;
    }

    Ok(text_block_id)
}

/// Upsert one cross-reference row, adding to the mention count when the
/// `(law, target)` pair already exists.
pub fn upsert_reference(conn: &Connection, law_id: i64, target: &str, mentions: u32) -> Result<()> {
    conn.execute(
        "INSERT INTO laws_references (law_id, target_section_number, mentions, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(law_id, target_section_number) DO UPDATE SET
             mentions = mentions + excluded.mentions",
        params![law_id, target, mentions, Utc::now()],
    )?;
    Ok(())
}

/// Delete a law's dictionary rows ahead of a re-insert (the replace
/// policy for re-ingested definitions).
pub fn clear_definitions(conn: &Connection, law_id: i64) -> Result<()> {
    conn.execute("DELETE FROM dictionary WHERE law_id = ?1", params![law_id])?;
    Ok(())
}

/// Insert one defined term.
pub fn insert_definition(
    conn: &Connection,
    law_id: i64,
    term: &str,
    definition: &str,
    scope: &str,
    scope_specificity: i64,
    structure_id: Option<i64>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO dictionary
             (law_id, term, definition, scope, scope_specificity, structure_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            law_id,
            term,
            definition,
            scope,
            scope_specificity,
            structure_id,
            Utc::now(),
        ],
    )?;
    Ok(())
}
