//! Section Parser: raw document → normalized document model.
//!
//! Converts one raw law into header metadata, a structural path, and an
//! ordered list of text segments with recursive prefix hierarchies.
//!
//! # Key Concepts
//! - **Segment**: one addressable unit of the body (subsection, paragraph,
//!   or atomic text block), numbered by a single sequence counter that is
//!   shared across the whole document and never reset per subtree.
//! - **Prefix hierarchy**: the ordered local address of a segment within
//!   the document (e.g. A, 4, b); its length equals the nesting depth.

use crate::document::{RawDocument, RawSubsection};
use crate::error::{CodifyError, Result};

/// One resolved level of a document's structural path, root to leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureLevel {
    /// Jurisdiction-assigned unit identifier (e.g. "18.2").
    pub number: String,

    /// Human label of the unit, possibly empty.
    pub name: String,

    /// Level tag, e.g. "title" or "chapter".
    pub label: String,

    /// Sort key for the unit. Defaults to the unit identifier when the
    /// raw header declares no explicit ordering.
    pub order_by: String,
}

/// One addressable unit of a document's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    /// 1-based position among all segments of the document.
    pub sequence: u32,

    /// The segment's own text, trimmed.
    pub text: String,

    /// Declared segment type (e.g. "table"). Absence means a plain
    /// section; the default is applied at persistence time, not here.
    pub kind: Option<String>,

    /// Ordered locally-scoped labels addressing this segment within the
    /// document. Empty for an undivided body.
    pub prefix_hierarchy: Vec<String>,
}

/// The parsed, normalized form of one raw document.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    /// Short descriptive title of the law.
    pub catch_line: String,

    /// Jurisdiction-assigned section number.
    pub section_number: String,

    /// Optional sort-order override.
    pub order_by: Option<String>,

    /// Free text of the amendment history.
    pub history: Option<String>,

    /// Structural path from root to the document's own leaf level.
    pub structure: Vec<StructureLevel>,

    /// Reconstructed concatenated body text.
    pub full_text: String,

    /// Ordered text segments.
    pub segments: Vec<TextSegment>,
}

impl NormalizedDocument {
    /// Structural coordinates of the document: the unit numbers of its
    /// path joined with "-" (e.g. "55-1" for title 55, chapter 1).
    pub fn structural_coordinates(&self) -> String {
        self.structure
            .iter()
            .map(|level| level.number.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Parse one raw document into its normalized form.
///
/// Fails with `MalformedDocument` if the catch line or section number is
/// absent; everything else is tolerated and resolved downstream.
pub fn parse_document(raw: &RawDocument) -> Result<NormalizedDocument> {
    if raw.catch_line.trim().is_empty() {
        return Err(CodifyError::MalformedDocument {
            section: raw.section_number.clone(),
            reason: "missing catch line".to_string(),
        });
    }

    if raw.section_number.trim().is_empty() {
        return Err(CodifyError::MalformedDocument {
            section: String::new(),
            reason: "missing section number".to_string(),
        });
    }

    // Structural headers, in document order (root to leaf). Units with
    // empty identifiers are carried through here; the structure registry
    // decides whether they can be resolved.
    let structure = raw
        .structure
        .iter()
        .map(|unit| StructureLevel {
            number: unit.identifier.clone(),
            name: unit.name.clone(),
            label: unit.label.clone(),
            order_by: unit
                .order_by
                .clone()
                .unwrap_or_else(|| unit.identifier.clone()),
        })
        .collect();

    // Walk the body.
    let mut walker = BodyWalker::new();
    for block in &raw.text {
        // A single undivided block is the whole body: one segment,
        // full text equal to the trimmed block.
        if block.subsections.is_empty() {
            walker.sequence += 1;
            walker.segments.push(TextSegment {
                sequence: walker.sequence,
                text: block.text.trim().to_string(),
                kind: None,
                prefix_hierarchy: Vec::new(),
            });
            walker.full_text = block.text.trim().to_string();
            break;
        }

        walker.walk(&block.subsections, 1);
    }

    Ok(NormalizedDocument {
        catch_line: raw.catch_line.clone(),
        section_number: raw.section_number.clone(),
        order_by: raw.order_by.clone(),
        history: raw.history.clone(),
        structure,
        full_text: walker.full_text,
        segments: walker.segments,
    })
}

/// Recursion state for one body walk.
///
/// The sequence counter and prefix-hierarchy stack are owned by this
/// value, created per parse call, never shared across documents.
struct BodyWalker {
    /// Monotonically increasing segment counter, shared across the whole
    /// document.
    sequence: u32,

    /// Prefix-hierarchy stack; truncated back to the parent depth when
    /// recursion returns.
    hierarchy: Vec<String>,

    /// Accumulated segments in document order.
    segments: Vec<TextSegment>,

    /// Accumulated full text. Only top-level subsections contribute,
    /// prefix-qualified and separated by "\r\r".
    full_text: String,
}

impl BodyWalker {
    fn new() -> Self {
        BodyWalker {
            sequence: 0,
            hierarchy: Vec::new(),
            segments: Vec::new(),
            full_text: String::new(),
        }
    }

    /// Emit segments for `subsections` at 1-based nesting `depth`,
    /// recursing into nested subsections of arbitrary depth.
    fn walk(&mut self, subsections: &[RawSubsection], depth: usize) {
        for subsection in subsections {
            // Cycle the stack back to this depth for each sibling; the
            // prefix token is always the subsection's own, even if empty.
            self.hierarchy.truncate(depth - 1);
            self.hierarchy.push(subsection.prefix.clone());

            self.sequence += 1;
            self.segments.push(TextSegment {
                sequence: self.sequence,
                text: subsection.text.trim().to_string(),
                kind: subsection.kind.clone(),
                prefix_hierarchy: self.hierarchy.clone(),
            });

            if depth == 1 {
                self.full_text.push_str(&subsection.prefix);
                self.full_text.push(' ');
                self.full_text.push_str(subsection.text.trim());
                self.full_text.push_str("\r\r");
            }

            if !subsection.subsections.is_empty() {
                self.walk(&subsection.subsections, depth + 1);
            }
        }

        // Returning to a shallower depth truncates the stack back to it.
        self.hierarchy.truncate(depth.saturating_sub(1));
    }
}
