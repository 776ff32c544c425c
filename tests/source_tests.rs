//! Document Source tests.

use codify::source::{DirectorySource, DocumentSource};
use std::fs;

fn write_doc(dir: &std::path::Path, file: &str, section: &str) {
    let body = format!(
        r#"{{"catch_line": "Test law.", "section_number": "{}", "text": [{{"text": "Body."}}]}}"#,
        section
    );
    fs::write(dir.join(file), body).expect("fixture write");
}

#[test]
fn documents_come_back_in_sorted_path_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_doc(dir.path(), "b.json", "1-2");
    write_doc(dir.path(), "a.json", "1-1");
    write_doc(dir.path(), "c.json", "1-3");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("fixture write");

    let mut source = DirectorySource::new(dir.path()).expect("source");
    assert_eq!(source.len(), 3, "only *.json files are documents");

    let mut sections = Vec::new();
    while let Some(entry) = source.next_document().expect("next") {
        sections.push(entry.document.section_number);
    }
    assert_eq!(sections, vec!["1-1", "1-2", "1-3"]);
}

#[test]
fn start_at_skips_already_ingested_documents() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_doc(dir.path(), "a.json", "1-1");
    write_doc(dir.path(), "b.json", "1-2");
    write_doc(dir.path(), "c.json", "1-3");

    let mut source = DirectorySource::new(dir.path()).expect("source").start_at(2);

    let entry = source
        .next_document()
        .expect("next")
        .expect("one document left");
    assert_eq!(entry.index, 2, "position is reported for resumption");
    assert_eq!(entry.document.section_number, "1-3");
    assert!(source.next_document().expect("next").is_none());
}

#[test]
fn unreadable_json_reports_the_file_and_iteration_continues() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("a.json"), "{ not json").expect("fixture write");
    write_doc(dir.path(), "b.json", "1-2");

    let mut source = DirectorySource::new(dir.path()).expect("source");

    match source.next_document() {
        Err(codify::CodifyError::InvalidDocumentJson { path, .. }) => {
            assert!(path.ends_with("a.json"));
        }
        other => panic!("expected InvalidDocumentJson, got {:?}", other.is_ok()),
    }

    // The cursor moved past the bad file; the next call yields b.json.
    let entry = source
        .next_document()
        .expect("next")
        .expect("good document");
    assert_eq!(entry.document.section_number, "1-2");
}
