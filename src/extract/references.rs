//! Reference Extractor: mentions of other sections within a law.

use crate::error::{CodifyError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Find every citation in `text` that matches the jurisdiction's
/// citation grammar and count occurrences per normalized target.
///
/// Matches are trimmed and one trailing `.`, `:`, or `-` is stripped.
/// No check is made that the cited section actually exists.
///
/// # Returns
/// * `Ok(map)` - target section number → mention count
/// * `Err(NoText)` - the input was empty
pub fn extract_references(text: &str, citation: &Regex) -> Result<HashMap<String, u32>> {
    if text.is_empty() {
        return Err(CodifyError::NoText);
    }

    let mut mentions: HashMap<String, u32> = HashMap::new();

    for found in citation.find_iter(text) {
        let trimmed = found.as_str().trim();
        // Lop off a trailing period, colon, or hyphen.
        let target = trimmed
            .strip_suffix(&['.', ':', '-'][..])
            .unwrap_or(trimmed);

        if target.is_empty() {
            continue;
        }

        *mentions.entry(target.to_string()).or_insert(0) += 1;
    }

    Ok(mentions)
}
