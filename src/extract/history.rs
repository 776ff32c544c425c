//! History Extractor: amendment histories into atomic data.
//!
//! Histories are semicolon-separated updates in two shapes: a single
//! chapter ("2010, c. 402, § 1-15.1") or a chapter list
//! ("2009, cc. 401, 518, 726, § 2.1-350.2"), each optionally trailed by
//! a section citation.

use crate::error::{CodifyError, Result};
use regex::Regex;

/// One atomic amendment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Year of the act.
    pub year: String,

    /// Acts-of-assembly chapter numbers; one entry for the `c.` form,
    /// several for the `cc.` form.
    pub chapters: Vec<String>,

    /// Section citation attached to the update, when present.
    pub section: Option<String>,
}

/// Parse an amendment-history string into atomic entries.
///
/// Updates that match neither shape are skipped. The `citation` pattern
/// is the jurisdiction's section-citation grammar, used to pick up the
/// trailing section reference.
///
/// # Returns
/// * `Ok(entries)` - parsed updates in document order
/// * `Err(NoText)` - the history string was empty
pub fn extract_history(history: &str, citation: &Regex) -> Result<Vec<HistoryEntry>> {
    if history.is_empty() {
        return Err(CodifyError::NoText);
    }

    // Match updates of the format "2010, c. 402, § 1-15.1".
    let single = Regex::new(r"([0-9]{4}), c\. ([0-9]+)(.*)")?;

    // Match updates of the format "2009, cc. 401, 518, 726, § 2.1-350.2".
    // Commas without spaces occur through typographical errors in
    // histories, so the list is split on the comma alone.
    let multi = Regex::new(r"([0-9]{2,4}), cc\. ([0-9,\s]+)")?;

    let mut entries = Vec::new();

    // The list is separated by semicolons and spaces.
    for update in history.split("; ") {
        if let Some(caps) = single.captures(update) {
            let section = caps
                .get(3)
                .and_then(|rest| citation.find(rest.as_str()))
                .map(|found| {
                    let trimmed = found.as_str().trim();
                    trimmed
                        .strip_suffix(&['.', ':', '-'][..])
                        .unwrap_or(trimmed)
                        .to_string()
                });

            entries.push(HistoryEntry {
                year: caps[1].to_string(),
                chapters: vec![caps[2].to_string()],
                section,
            });
        } else if let Some(caps) = multi.captures(update) {
            let chapters: Vec<String> = caps[2]
                .trim()
                .trim_end_matches(',')
                .split(',')
                .map(str::trim)
                .filter(|chapter| !chapter.is_empty())
                .map(str::to_string)
                .collect();

            let section = citation.find(update).map(|found| {
                let trimmed = found.as_str().trim();
                trimmed
                    .strip_suffix(&['.', ':', '-'][..])
                    .unwrap_or(trimmed)
                    .to_string()
            });

            entries.push(HistoryEntry {
                year: caps[1].to_string(),
                chapters,
                section,
            });
        }
    }

    Ok(entries)
}
