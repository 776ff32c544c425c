//! Section Parser tests.

use codify::document::{RawDocument, RawSubsection, RawTextBlock};
use codify::parse::parse_document;
use codify::CodifyError;

fn header(catch_line: &str, section_number: &str) -> RawDocument {
    RawDocument {
        catch_line: catch_line.to_string(),
        section_number: section_number.to_string(),
        ..RawDocument::default()
    }
}

fn subsection(prefix: &str, text: &str, nested: Vec<RawSubsection>) -> RawSubsection {
    RawSubsection {
        prefix: prefix.to_string(),
        kind: None,
        text: text.to_string(),
        subsections: nested,
    }
}

#[test]
fn undivided_body_round_trips_as_one_segment() {
    let mut raw = header("Robbery; how punished.", "18.2-58");
    raw.text = vec![RawTextBlock {
        text: "  Robbery is punishable as a felony.  ".to_string(),
        subsections: vec![],
    }];

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.segments.len(), 1, "undivided body is one segment");
    assert_eq!(doc.segments[0].sequence, 1);
    assert_eq!(doc.segments[0].text, "Robbery is punishable as a felony.");
    assert!(doc.segments[0].prefix_hierarchy.is_empty());
    assert_eq!(
        doc.full_text, doc.segments[0].text,
        "full text equals the single segment's text"
    );
}

#[test]
fn nested_subsections_track_prefix_hierarchy_and_sequence() {
    let mut raw = header("Definitions.", "55-248.4");
    raw.text = vec![RawTextBlock {
        text: String::new(),
        subsections: vec![
            subsection(
                "A",
                "First top-level subsection.",
                vec![subsection(
                    "1",
                    "Nested once.",
                    vec![subsection("a", "Nested twice.", vec![])],
                )],
            ),
            subsection("B", "Second top-level subsection.", vec![]),
        ],
    }];

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.segments.len(), 4);

    // One monotonically increasing counter across the whole document.
    let sequences: Vec<u32> = doc.segments.iter().map(|s| s.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4]);

    assert_eq!(doc.segments[0].prefix_hierarchy, vec!["A"]);
    assert_eq!(doc.segments[1].prefix_hierarchy, vec!["A", "1"]);
    assert_eq!(
        doc.segments[2].prefix_hierarchy,
        vec!["A", "1", "a"],
        "deepest segment's hierarchy has length 3"
    );
    assert_eq!(
        doc.segments[3].prefix_hierarchy,
        vec!["B"],
        "hierarchy truncates back when recursion returns to a shallower sibling"
    );
}

#[test]
fn full_text_accumulates_top_level_subsections_only() {
    let mut raw = header("Fees.", "2.2-100");
    raw.text = vec![RawTextBlock {
        text: String::new(),
        subsections: vec![
            subsection(
                "A",
                "Top one.",
                vec![subsection("1", "Nested detail.", vec![])],
            ),
            subsection("B", "Top two.", vec![]),
        ],
    }];

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.full_text, "A Top one.\r\rB Top two.\r\r");
}

#[test]
fn segment_type_is_preserved_but_not_defaulted_at_parse_time() {
    let mut raw = header("Tables.", "1-1");
    raw.text = vec![RawTextBlock {
        text: String::new(),
        subsections: vec![
            RawSubsection {
                prefix: "A".to_string(),
                kind: Some("table".to_string()),
                text: "| a | b |".to_string(),
                subsections: vec![],
            },
            subsection("B", "Plain.", vec![]),
        ],
    }];

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.segments[0].kind.as_deref(), Some("table"));
    assert_eq!(
        doc.segments[1].kind, None,
        "the section default applies at persistence time, not in the parser"
    );
}

#[test]
fn structural_headers_default_order_by_to_identifier() {
    let raw: RawDocument = serde_json::from_str(
        r#"{
            "catch_line": "Short title.",
            "section_number": "1-200",
            "structure": [
                {"name": "General Provisions", "label": "title", "identifier": "1", "order_by": "001"},
                {"name": "Common Law", "label": "chapter", "identifier": "2"}
            ],
            "text": [{"text": "The common law of England continues in force."}]
        }"#,
    )
    .expect("fixture should deserialize");

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.structure.len(), 2);
    assert_eq!(doc.structure[0].order_by, "001");
    assert_eq!(
        doc.structure[1].order_by, "2",
        "missing order_by falls back to the unit identifier"
    );
    assert_eq!(doc.structural_coordinates(), "1-2");
}

#[test]
fn missing_catch_line_is_malformed() {
    let raw = header("   ", "18.2-58");

    match parse_document(&raw) {
        Err(CodifyError::MalformedDocument { section, .. }) => {
            assert_eq!(section, "18.2-58");
        }
        other => panic!("expected MalformedDocument, got {:?}", other.map(|d| d.section_number)),
    }
}

#[test]
fn missing_section_number_is_malformed() {
    let raw = header("Robbery.", "");

    assert!(matches!(
        parse_document(&raw),
        Err(CodifyError::MalformedDocument { .. })
    ));
}

#[test]
fn empty_prefix_tokens_are_carried_through() {
    let mut raw = header("Untagged subsections.", "9-1");
    raw.text = vec![RawTextBlock {
        text: String::new(),
        subsections: vec![subsection("", "No prefix on this one.", vec![])],
    }];

    let doc = parse_document(&raw).expect("parse should succeed");

    assert_eq!(doc.segments[0].prefix_hierarchy, vec![String::new()]);
}
