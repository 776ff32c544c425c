//! Definition Extractor: defined terms and their scope of applicability.
//!
//! Works on the reconstructed full text of a law. Defined terms are
//! quoted spans inside paragraphs that carry a defining-verb phrase;
//! scope is inferred from stock phrases in the first paragraph.
//!
//! # Key Concepts
//! - **Quote convention**: a law uses either straight (`"`) or
//!   directional (`“ ”`) quotes; whichever dominates decides which
//!   character marks defined terms.
//! - **Scope**: how far a definition applies: the section itself, an
//!   enclosing structural level (chapter, title, ...), or the whole code.

use crate::error::{CodifyError, Result};
use regex::Regex;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Phrases that signal chapter-level (or equivalent) scope.
const CHAPTER_PHRASES: [&str; 6] = [
    "as used in this chapter",
    "are used in this chapter",
    "for the purpose of this chapter",
    "for purposes of this chapter",
    "as used in this article",
    "as used in this act",
];

/// Phrases that signal section-level scope.
const SECTION_PHRASES: [&str; 2] = ["as used in this section", "for purposes of this section"];

/// Defining-verb phrases that qualify a paragraph as a candidate
/// definition.
const DEFINING_PHRASES: [&str; 7] = [
    " mean ",
    " means ",
    " shall include ",
    " includes ",
    " has the same meaning as ",
    " shall be construed ",
    " shall also be construed to mean ",
];

/// Scope of applicability for a set of definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The defining section only.
    Section,

    /// An enclosing structural level, named by its label
    /// (e.g. "chapter", "title").
    Structural(String),

    /// The entire code.
    Global,
}

impl Scope {
    /// The scope's storage label.
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Section => "section",
            Scope::Structural(label) => label,
            Scope::Global => "global",
        }
    }
}

/// One law's extracted definitions.
#[derive(Debug, Clone)]
pub struct DefinitionSet {
    /// Case-normalized term → definition text. A term appears at most
    /// once; repeated definitions are merged per the rules in
    /// [`DefinitionScanner::extract`].
    pub terms: BTreeMap<String, String>,

    /// Inferred scope for the whole set.
    pub scope: Scope,
}

/// Compiled scanning patterns for definition extraction.
pub struct DefinitionScanner {
    /// Quoted-span pattern: opening quote, a letter, letters / commas /
    /// apostrophes / spaces / hyphens, a letter, closing quote.
    term: Regex,

    /// Markup stripper for residual HTML-ish tags.
    markup: Regex,
}

impl DefinitionScanner {
    /// Compile the scanning patterns.
    pub fn new() -> Result<Self> {
        Ok(DefinitionScanner {
            term: Regex::new(r#"["“][A-Za-z][A-Za-z,'\s-]*[A-Za-z]["”]"#)?,
            markup: Regex::new(r"<[^>]*>")?,
        })
    }

    /// Extract every defined term from `text`.
    ///
    /// # Returns
    /// * `Ok(DefinitionSet)` - terms found, with the inferred scope
    /// * `Err(NoDefinitionsFound)` - no paragraph yielded a term
    pub fn extract(&self, text: &str) -> Result<DefinitionSet> {
        // Measure whether straight or directional quotes dominate. The
        // directional count is doubled since only the closing side is
        // counted.
        let straight = text.matches('"').count();
        let directional = text.matches('”').count();
        let quote = if straight > directional * 2 { '"' } else { '”' };

        // Break the text into paragraphs; residual internal breaks
        // within a multi-part definition become spaces, and any markup
        // is stripped to leave plain text.
        let paragraphs: Vec<String> = text
            .split("\r\r")
            .map(|paragraph| {
                let joined = paragraph.replace('\r', " ");
                self.markup.replace_all(&joined, "").into_owned()
            })
            .collect();

        let mut scope = Scope::Structural("chapter".to_string());
        let mut terms: BTreeMap<String, String> = BTreeMap::new();

        for (index, paragraph) in paragraphs.iter().enumerate() {
            // The scope of the whole set is calculated from the first
            // paragraph only.
            if index == 0 {
                scope = infer_scope(paragraph);
            }

            // Defined terms are surrounded by quotation marks, so use
            // that to round down the candidate paragraphs.
            if !paragraph.contains(quote) {
                continue;
            }

            if !DEFINING_PHRASES
                .iter()
                .any(|phrase| paragraph.contains(phrase))
            {
                continue;
            }

            // A definition can be preceded by a subsection number; pare
            // the stored text down to start at the first quotation mark
            // of either convention.
            let definition = match paragraph.find(&['"', '“', '”'][..]) {
                Some(at) => &paragraph[at..],
                None => paragraph.as_str(),
            };

            for found in self.term.find_iter(paragraph) {
                let span = found
                    .as_str()
                    .trim_matches(&['"', '“', '”'][..])
                    .trim();

                // Drop noise words that occur in lists of terms.
                if span == "and" || span == "or" {
                    continue;
                }

                // Comma-separated lists of defined words need the
                // trailing comma removed.
                let span = span.strip_suffix(',').unwrap_or(span);

                // A term containing any lowercase character is an
                // ordinary word and is stored entirely lowercase. An
                // all-caps term is an acronym and keeps its case, so
                // it does not match substrings elsewhere.
                let term = if span.chars().any(|c| c.is_ascii_lowercase()) {
                    span.to_lowercase()
                } else {
                    span.to_string()
                };

                if term.is_empty() {
                    continue;
                }

                match terms.entry(term) {
                    Entry::Vacant(slot) => {
                        slot.insert(definition.to_string());
                    }
                    Entry::Occupied(mut slot) => {
                        // A word defined twice, once for what it means and
                        // once for what it does not, gets both texts.
                        // An identical repeat (the term re-quoted inside
                        // its own definition) is dropped.
                        if slot.get().trim() != definition.trim() {
                            let merged = format!("{} {}", slot.get(), definition);
                            slot.insert(merged);
                        }
                    }
                }
            }
        }

        if terms.is_empty() {
            return Err(CodifyError::NoDefinitionsFound);
        }

        Ok(DefinitionSet { terms, scope })
    }
}

/// Infer the scope of a definition set from its first paragraph.
///
/// Phrase priority: chapter-level, then title, then section, then
/// global; an unmatched paragraph defaults to chapter scope.
fn infer_scope(paragraph: &str) -> Scope {
    let lowered = paragraph.to_lowercase();

    if CHAPTER_PHRASES.iter().any(|p| lowered.contains(p)) {
        return Scope::Structural("chapter".to_string());
    }

    if lowered.contains("in this title") {
        return Scope::Structural("title".to_string());
    }

    if SECTION_PHRASES.iter().any(|p| lowered.contains(p)) {
        return Scope::Section;
    }

    if lowered.contains("as used in this code") {
        return Scope::Global;
    }

    Scope::Structural("chapter".to_string())
}
