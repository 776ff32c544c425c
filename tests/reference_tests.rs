//! Reference Extractor tests.

use codify::extract::extract_references;
use codify::jurisdiction::Jurisdiction;
use codify::CodifyError;

fn citation() -> regex::Regex {
    Jurisdiction::default()
        .citation_regex()
        .expect("default citation pattern compiles")
}

#[test]
fn repeated_citation_is_counted_once_with_mentions() {
    let mentions = extract_references("See § 18.2-61 and § 18.2-61 again.", &citation())
        .expect("extraction should succeed");

    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions.get("18.2-61"), Some(&2));
}

#[test]
fn distinct_citations_get_separate_counts() {
    let text = "Subject to § 55-248.4, a violation of § 18.2-61 is punishable under § 18.2-61.";
    let mentions = extract_references(text, &citation()).expect("extraction should succeed");

    assert_eq!(mentions.get("55-248.4"), Some(&1));
    assert_eq!(mentions.get("18.2-61"), Some(&2));
}

#[test]
fn trailing_punctuation_is_stripped_from_targets() {
    let text = "Procedure is governed by § 8.01-42. Appeals lie under § 17.1-405:";
    let mentions = extract_references(text, &citation()).expect("extraction should succeed");

    assert_eq!(mentions.get("8.01-42"), Some(&1), "trailing period stripped");
    assert_eq!(mentions.get("17.1-405"), Some(&1), "trailing colon stripped");
    assert!(
        mentions.keys().all(|k| !k.ends_with(['.', ':', '-'])),
        "no normalized target keeps trailing punctuation"
    );
}

#[test]
fn subdivided_citations_survive_normalization() {
    let text = "The landlord shall comply with § 55-248.18:2 of this chapter.";
    let mentions = extract_references(text, &citation()).expect("extraction should succeed");

    assert_eq!(mentions.get("55-248.18:2"), Some(&1));
}

#[test]
fn prose_without_citations_yields_an_empty_table() {
    let mentions = extract_references("No references appear in this sentence.", &citation())
        .expect("extraction should succeed");

    assert!(mentions.is_empty());
}

#[test]
fn empty_text_is_a_no_text_error() {
    assert!(matches!(
        extract_references("", &citation()),
        Err(CodifyError::NoText)
    ));
}
