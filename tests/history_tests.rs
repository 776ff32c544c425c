//! History Extractor tests.

use codify::extract::extract_history;
use codify::jurisdiction::Jurisdiction;
use codify::CodifyError;

fn citation() -> regex::Regex {
    Jurisdiction::default()
        .citation_regex()
        .expect("default citation pattern compiles")
}

#[test]
fn single_chapter_update_is_atomized() {
    let entries = extract_history("2010, c. 402, § 1-15.1", &citation())
        .expect("extraction should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].year, "2010");
    assert_eq!(entries[0].chapters, vec!["402"]);
    assert_eq!(entries[0].section.as_deref(), Some("1-15.1"));
}

#[test]
fn multi_chapter_update_collects_every_chapter() {
    let entries = extract_history("2009, cc. 401, 518, 726, § 2.1-350.2", &citation())
        .expect("extraction should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].year, "2009");
    assert_eq!(entries[0].chapters, vec!["401", "518", "726"]);
    assert_eq!(entries[0].section.as_deref(), Some("2.1-350.2"));
}

#[test]
fn semicolon_separated_updates_stay_in_order() {
    let entries = extract_history("1995, c. 10; 2009, cc. 401, 518", &citation())
        .expect("extraction should succeed");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].year, "1995");
    assert_eq!(entries[0].chapters, vec!["10"]);
    assert_eq!(entries[0].section, None);
    assert_eq!(entries[1].year, "2009");
    assert_eq!(entries[1].chapters, vec!["401", "518"]);
}

#[test]
fn typographical_double_commas_are_tolerated() {
    let entries = extract_history("2009, cc. 401,, 518", &citation())
        .expect("extraction should succeed");

    assert_eq!(entries[0].chapters, vec!["401", "518"]);
}

#[test]
fn unrecognized_updates_are_skipped() {
    let entries = extract_history("Code 1950; 1975, c. 495", &citation())
        .expect("extraction should succeed");

    assert_eq!(entries.len(), 1, "only the parseable update survives");
    assert_eq!(entries[0].year, "1975");
}

#[test]
fn empty_history_is_a_no_text_error() {
    assert!(matches!(
        extract_history("", &citation()),
        Err(CodifyError::NoText)
    ));
}
