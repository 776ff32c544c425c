//! Jurisdiction profile.
//!
//! The pipeline itself is jurisdiction-agnostic; everything that varies
//! between legal codes lives here: the ordered list of structural level
//! labels, the citation grammar, and the coordinates of the structural
//! unit (if any) that holds the code's global definitions.

use crate::error::{CodifyError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything that varies between legal codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Short identifier for the jurisdiction (e.g. "virginia").
    pub name: String,

    /// Structural level labels ordered from most general to most
    /// specific (e.g. `["title", "chapter"]`).
    pub structure_labels: Vec<String>,

    /// Regular expression recognizing the jurisdiction's
    /// numeral-dot-numeral statute-citation grammar.
    pub citation_pattern: String,

    /// Structural coordinates of the global-definitions unit, as the
    /// unit numbers of the path joined with "-" (e.g. "1-2"). Documents
    /// at this location have their definition scope forced to global.
    #[serde(default)]
    pub global_definitions: Option<String>,
}

impl Default for Jurisdiction {
    /// The Virginia profile the original implementation shipped with.
    fn default() -> Self {
        Jurisdiction {
            name: "virginia".to_string(),
            structure_labels: vec!["title".to_string(), "chapter".to_string()],
            citation_pattern:
                r"\b[0-9]{1,2}(?:\.[0-9]{1,2})?[A-Za-z]?-[0-9]{1,4}(?:\.[0-9]{1,4})?(?::[0-9]{1,4})?[.:-]?"
                    .to_string(),
            global_definitions: None,
        }
    }
}

impl Jurisdiction {
    /// Load a profile from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CodifyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let profile: Jurisdiction =
            serde_json::from_str(&content).map_err(|e| CodifyError::InvalidProfile {
                message: format!("JSON parse error: {}", e),
            })?;

        profile.validate()?;
        Ok(profile)
    }

    /// Validate the profile's required fields.
    pub fn validate(&self) -> Result<()> {
        if self.structure_labels.is_empty() {
            return Err(CodifyError::InvalidProfile {
                message: "profile must declare at least one structural level".to_string(),
            });
        }

        for label in &self.structure_labels {
            if label.trim().is_empty() {
                return Err(CodifyError::InvalidProfile {
                    message: "structural level labels must be non-empty".to_string(),
                });
            }
        }

        if self.citation_pattern.is_empty() {
            return Err(CodifyError::InvalidProfile {
                message: "profile must declare a citation pattern".to_string(),
            });
        }

        Ok(())
    }

    /// Compile the citation pattern.
    pub fn citation_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.citation_pattern)?)
    }

    /// Rank a definition scope within this jurisdiction's structural
    /// level ordering.
    ///
    /// The specificity stack runs from most to least specific:
    /// "section", then the declared levels leaf-to-root, then "global".
    /// A structural label the profile does not declare (e.g. "article"
    /// in a title/chapter code) ranks as the most specific structural
    /// slot.
    pub fn scope_specificity(&self, scope_label: &str) -> i64 {
        let mut stack: Vec<&str> = vec!["section"];
        stack.extend(self.structure_labels.iter().rev().map(String::as_str));
        stack.push("global");

        stack
            .iter()
            .position(|label| *label == scope_label)
            .unwrap_or(1) as i64
    }
}
