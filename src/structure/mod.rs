//! Structure Registry: the forest of structural nodes.
//!
//! Provides idempotent lookup-or-create for structural units (titles,
//! chapters, articles, ...) and the ancestry walk used to bound a
//! definition's scope. Safe to call repeatedly for the same
//! `(number, parent)` across the entire ingestion run, including across
//! separate process invocations. Callers rely on exactly this to re-run
//! ingestion without duplicating tree nodes.

use crate::error::{CodifyError, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Registry over a borrowed storage connection.
///
/// The connection is passed in explicitly (usually the orchestrator's
/// per-document transaction) rather than held globally.
pub struct StructureRegistry<'c> {
    conn: &'c Connection,
}

impl<'c> StructureRegistry<'c> {
    /// Create a registry over the given connection.
    pub fn new(conn: &'c Connection) -> Self {
        StructureRegistry { conn }
    }

    /// Look up or create the structural node `(number, parent)` and
    /// return its id.
    ///
    /// An existing node is returned unchanged; its name and label are
    /// not updated. Fails with `InvalidStructuralUnit` when `number` or
    /// `label` is empty, which is how dangling references to renumbered
    /// or repealed units surface; callers skip the level instead of
    /// failing the document.
    pub fn resolve(
        &self,
        number: &str,
        label: &str,
        name: Option<&str>,
        parent: Option<i64>,
    ) -> Result<i64> {
        if number.is_empty() {
            return Err(CodifyError::InvalidStructuralUnit {
                reason: "empty unit number".to_string(),
            });
        }

        if label.is_empty() {
            return Err(CodifyError::InvalidStructuralUnit {
                reason: format!("empty label for unit '{}'", number),
            });
        }

        if let Some(id) = self.lookup(number, parent)? {
            return Ok(id);
        }

        // Insert-if-absent: the partial unique indexes on
        // (number, parent_id) turn a concurrent duplicate into a no-op,
        // and the re-select below resolves either way.
        self.conn.execute(
            "INSERT INTO structure (number, name, label, parent_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT DO NOTHING",
            params![number, name, label, parent, Utc::now()],
        )?;

        match self.lookup(number, parent)? {
            Some(id) => Ok(id),
            None => Err(CodifyError::Other(format!(
                "structural unit '{}' vanished between insert and lookup",
                number
            ))),
        }
    }

    /// Find a node by `(number, parent)`. Absent parent means a root
    /// unit.
    fn lookup(&self, number: &str, parent: Option<i64>) -> Result<Option<i64>> {
        let id = match parent {
            Some(parent_id) => self
                .conn
                .query_row(
                    "SELECT id FROM structure WHERE number = ?1 AND parent_id = ?2",
                    params![number, parent_id],
                    |row| row.get(0),
                )
                .optional()?,
            None => self
                .conn
                .query_row(
                    "SELECT id FROM structure WHERE number = ?1 AND parent_id IS NULL",
                    params![number],
                    |row| row.get(0),
                )
                .optional()?,
        };
        Ok(id)
    }

    /// Walk the ancestry of `start` (inclusive) until a node whose label
    /// equals `label` is found.
    ///
    /// Used to bound a definition's scope of applicability. A missed
    /// label returns `None`, not an error; the definition is then
    /// stored without a bounding node.
    pub fn find_ancestor_with_label(&self, start: i64, label: &str) -> Result<Option<i64>> {
        let mut cursor = Some(start);

        while let Some(id) = cursor {
            let row: Option<(String, Option<i64>)> = self
                .conn
                .query_row(
                    "SELECT label, parent_id FROM structure WHERE id = ?1",
                    params![id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            match row {
                None => return Ok(None),
                Some((node_label, parent)) => {
                    if node_label == label {
                        return Ok(Some(id));
                    }
                    cursor = parent;
                }
            }
        }

        Ok(None)
    }
}
