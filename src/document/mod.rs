//! Raw document model.
//!
//! This is the wire shape a jurisdiction-specific adapter feeds to the
//! pipeline: one JSON object per law, carrying the header fields, the
//! structural-header block, and the (arbitrarily nested) body text.

use crate::error::{CodifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw law document, exactly as supplied by the document source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    /// Short descriptive title of the law ("catch line").
    #[serde(default)]
    pub catch_line: String,

    /// Jurisdiction-assigned section number (e.g. "18.2-61").
    #[serde(default)]
    pub section_number: String,

    /// Optional sort-order override for the section.
    #[serde(default)]
    pub order_by: Option<String>,

    /// Free text of the amendment history, when present.
    #[serde(default)]
    pub history: Option<String>,

    /// Structural-header block, ordered from root to leaf
    /// (e.g. title, then chapter).
    #[serde(default)]
    pub structure: Vec<RawStructuralUnit>,

    /// Body of the law as a list of text blocks.
    #[serde(default)]
    pub text: Vec<RawTextBlock>,
}

/// One declared level of the structural hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStructuralUnit {
    /// Human label of the unit (e.g. "Crimes and Offenses Generally").
    /// Some units legitimately have none.
    #[serde(default)]
    pub name: String,

    /// Level tag, e.g. "title" or "chapter".
    #[serde(default)]
    pub label: String,

    /// Jurisdiction-assigned identifier of the unit (e.g. "18.2").
    #[serde(default)]
    pub identifier: String,

    /// Optional sort-order override for the unit.
    #[serde(default)]
    pub order_by: Option<String>,
}

/// One block of body text, optionally subdivided into subsections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTextBlock {
    /// The block's own text. Meaningful only for undivided blocks.
    #[serde(default)]
    pub text: String,

    /// Top-level subsections, empty for an undivided block.
    #[serde(default)]
    pub subsections: Vec<RawSubsection>,
}

/// One subsection of a text block. Nesting depth is unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSubsection {
    /// Locally-scoped prefix token (e.g. "A", "4", "b"). May be empty.
    #[serde(default)]
    pub prefix: String,

    /// Optional segment type (e.g. "table").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// The subsection's own text, excluding nested subsections.
    #[serde(default)]
    pub text: String,

    /// Nested subsections, arbitrarily deep.
    #[serde(default)]
    pub subsections: Vec<RawSubsection>,
}

impl RawDocument {
    /// Deserialize a raw document from a JSON string.
    pub fn from_json_str(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CodifyError::InvalidDocumentJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and deserialize a raw document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CodifyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(path, &content)
    }
}
