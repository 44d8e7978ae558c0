//! End-to-end content display flow: parse an AI-generated blob into
//! sections, then classify each body into display lines. Mirrors how the
//! report view renders original and enhanced content side by side.

use reviewkita_content::{parse_sections, render_lines};
use reviewkita_core::ContentLine;

const ENHANCED_BLOB: &str = "\
Intro chatter the generator sometimes leaves in.

[SECTION: SUMMARY] [Summary]
Photosynthesis converts light into chemical energy.
It occurs in chloroplasts.
[END_SECTION]

[SECTION: KEY_TERMS] [Key Terms]
chlorophyll - green pigment

stomata - leaf pores
[END_SECTION]
";

#[test]
fn parses_and_renders_enhanced_blob() {
    let sections = parse_sections(Some(ENHANCED_BLOB));
    assert_eq!(sections.len(), 2);

    let summary = &sections[0];
    assert_eq!(summary.key, "SUMMARY");
    assert_eq!(summary.title, "Summary");

    // Two consecutive sentences stay separate display blocks.
    let lines = render_lines(&summary.content);
    assert_eq!(
        lines,
        vec![
            ContentLine::Paragraph("Photosynthesis converts light into chemical energy.".into()),
            ContentLine::Paragraph("It occurs in chloroplasts.".into()),
        ]
    );

    // The blank line between terms survives as a break.
    let term_lines = render_lines(&sections[1].content);
    assert_eq!(
        term_lines,
        vec![
            ContentLine::Paragraph("chlorophyll - green pigment".into()),
            ContentLine::Break,
            ContentLine::Paragraph("stomata - leaf pores".into()),
        ]
    );
}

#[test]
fn unstructured_blob_yields_no_sections_for_raw_fallback() {
    // "No sections found" is a legitimate outcome distinct from empty input;
    // the caller renders the raw blob instead.
    let raw = "Just plain study notes without any generator markers.";
    assert!(parse_sections(Some(raw)).is_empty());
    assert!(!raw.is_empty());
}

#[test]
fn original_and_enhanced_parsed_independently() {
    let original = "[SECTION: SUMMARY] [Summary]\nshort original\n[END_SECTION]";
    let enhanced = "[SECTION: SUMMARY] [Summary]\nlonger enhanced rendition\n[END_SECTION]";

    let left = parse_sections(Some(original));
    let right = parse_sections(Some(enhanced));
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);
    assert_ne!(left[0].content, right[0].content);
    assert_eq!(left[0].key, right[0].key);
}
