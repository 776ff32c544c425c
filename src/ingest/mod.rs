//! Ingestion Orchestrator: raw document → persisted normalized record.
//!
//! Sequences the Structure Registry, Section Parser, Reference
//! Extractor, and Definition Extractor to persist one fully normalized
//! record per input document. Every document is written inside a single
//! transaction, so a storage failure rolls the document back as a whole.

use crate::document::RawDocument;
use crate::error::{CodifyError, Result};
use crate::extract::{extract_references, DefinitionScanner, Scope};
use crate::jurisdiction::Jurisdiction;
use crate::parse::{parse_document, NormalizedDocument};
use crate::store::{self, LawStore};
use crate::structure::StructureRegistry;
use regex::Regex;
use rusqlite::Connection;

/// Catch-line markers that trigger the definition pass. The catch line
/// is matched by substring because a title like "Definitions." is
/// sometimes preceded by other text, e.g. "(Effective July 1, 2012) ".
const NAME_MARKERS: [&str; 3] = ["Definition", "Meaning of certain terms.", "Meaning of "];

/// Body-text markers that trigger the definition pass.
const TEXT_MARKERS: [&str; 8] = [
    "\" mean ",
    "\" means ",
    "\" shall include ",
    "\" includes ",
    "\" has the same meaning",
    " as used in this ",
    " for the purpose of this ",
    " for purposes of this ",
];

/// Main ingestion orchestrator.
///
/// Owns the store handle and the jurisdiction profile; everything else
/// is created per document.
pub struct Ingestor {
    store: LawStore,
    jurisdiction: Jurisdiction,
    citation: Regex,
    scanner: DefinitionScanner,
}

impl Ingestor {
    /// Create an ingestor over the given store and jurisdiction
    /// profile. Compiles the profile's citation pattern up front.
    pub fn new(store: LawStore, jurisdiction: Jurisdiction) -> Result<Self> {
        jurisdiction.validate()?;
        let citation = jurisdiction.citation_regex()?;
        let scanner = DefinitionScanner::new()?;

        Ok(Ingestor {
            store,
            jurisdiction,
            citation,
            scanner,
        })
    }

    /// Borrow the underlying store, mainly for inspection after a run.
    pub fn store(&self) -> &LawStore {
        &self.store
    }

    /// Ingest one raw document and return its law id.
    ///
    /// Fails with `MalformedDocument` when required header fields are
    /// missing (callers skip and continue) or `Storage` when a write is
    /// rejected (the document's transaction rolls back).
    pub fn ingest(&mut self, raw: &RawDocument) -> Result<i64> {
        let doc = parse_document(raw)?;

        let tx = self.store.transaction()?;
        let law_id = persist_document(&tx, &self.jurisdiction, &self.citation, &self.scanner, &doc)?;
        tx.commit()?;

        log::debug!("ingested section {} as law {}", doc.section_number, law_id);
        Ok(law_id)
    }
}

/// Persist one normalized document through the given connection
/// (the orchestrator's open transaction).
fn persist_document(
    conn: &Connection,
    jurisdiction: &Jurisdiction,
    citation: &Regex,
    scanner: &DefinitionScanner,
    doc: &NormalizedDocument,
) -> Result<i64> {
    let registry = StructureRegistry::new(conn);

    // Resolve the structural path from most general to most specific.
    // A level the registry rejects (dangling reference to a repealed
    // unit) is skipped: the resolved parent carries forward and the
    // document hangs off the deepest node that did resolve.
    let mut parent: Option<i64> = None;
    for level in &doc.structure {
        let name = (!level.name.is_empty()).then_some(level.name.as_str());
        match registry.resolve(&level.number, &level.label, name, parent) {
            Ok(id) => parent = Some(id),
            Err(CodifyError::InvalidStructuralUnit { reason }) => {
                log::warn!(
                    "section {}: skipping structural unit ({})",
                    doc.section_number,
                    reason
                );
            }
            Err(e) => return Err(e),
        }
    }
    let leaf = parent;

    // Document header, then its text segments with prefix tokens.
    let law_id = store::upsert_law(conn, leaf, doc)?;
    store::clear_segments(conn, law_id)?;
    for segment in &doc.segments {
        store::insert_segment(conn, law_id, segment)?;
    }

    // Cross-references. Finding nothing is not an error, and nothing
    // here prevents the base record from being stored.
    match extract_references(&doc.full_text, citation) {
        Ok(mentions) => {
            for (target, count) in &mentions {
                store::upsert_reference(conn, law_id, target, *count)?;
            }
        }
        Err(CodifyError::NoText) => {}
        Err(e) => return Err(e),
    }

    // Definitions, only for documents that look definitional or sit at
    // the jurisdiction's global-definitions location.
    let at_global_location = is_global_definitions_location(jurisdiction, doc);
    if at_global_location || wants_definitions(doc) {
        match scanner.extract(&doc.full_text) {
            Ok(mut set) => {
                // The configured location wins over whatever the text
                // itself implied.
                if at_global_location {
                    set.scope = Scope::Global;
                }

                let specificity = jurisdiction.scope_specificity(set.scope.as_str());

                // A structural scope is bounded by the nearest ancestor
                // carrying that label; a miss leaves the bound unset.
                let bounding = match (&set.scope, leaf) {
                    (Scope::Structural(label), Some(start)) => {
                        registry.find_ancestor_with_label(start, label)?
                    }
                    _ => None,
                };

                store::clear_definitions(conn, law_id)?;
                for (term, definition) in &set.terms {
                    store::insert_definition(
                        conn,
                        law_id,
                        term,
                        definition,
                        set.scope.as_str(),
                        specificity,
                        bounding,
                    )?;
                }
            }
            Err(CodifyError::NoDefinitionsFound) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(law_id)
}

/// Whether a document's catch line or text marks it as definitional.
fn wants_definitions(doc: &NormalizedDocument) -> bool {
    NAME_MARKERS
        .iter()
        .any(|marker| doc.catch_line.contains(marker))
        || TEXT_MARKERS
            .iter()
            .any(|marker| doc.full_text.contains(marker))
}

/// Whether the document sits at the jurisdiction's configured
/// global-definitions location.
fn is_global_definitions_location(jurisdiction: &Jurisdiction, doc: &NormalizedDocument) -> bool {
    match &jurisdiction.global_definitions {
        Some(location) => !location.is_empty() && doc.structural_coordinates() == *location,
        None => false,
    }
}
