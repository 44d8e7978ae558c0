//! Explicit scanner for the section delimiter grammar.
//!
//! The grammar is a contract with the upstream content generator and must be
//! recognized exactly:
//!
//! ```text
//! [SECTION: <KEY>] [<Title>]
//! <body lines...>
//! [END_SECTION]
//! ```
//!
//! repeated zero or more times. Text outside the markers is ignored, never
//! collected. The scanner is deliberately token-by-token rather than a single
//! pattern, so the edge cases stay explicit:
//!
//! - a header with no later `[END_SECTION]` is silently dropped, and
//!   scanning stops (no later section could be terminated either);
//! - the body runs to the *nearest* terminator, even when another header
//!   sits in between;
//! - a malformed header (unclosed key bracket, missing title bracket) is
//!   skipped and scanning resumes after it;
//! - keys are not validated — any bracketed token is accepted.

use tracing::debug;

use reviewkita_core::ContentSection;

/// Opens a section header.
const HEADER_TOKEN: &str = "[SECTION:";

/// Terminates a section body.
const END_TOKEN: &str = "[END_SECTION]";

/// Extract all labeled sections from a content blob.
///
/// `None` and empty input produce an empty list; so does input with no
/// markers. Zero sections is a legitimate non-error outcome — callers fall
/// back to rendering the raw blob — and this function never fails.
pub fn parse_sections(content: Option<&str>) -> Vec<ContentSection> {
    let Some(text) = content else {
        return Vec::new();
    };
    if text.is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(found) = text[pos..].find(HEADER_TOKEN) {
        let key_start = pos + found + HEADER_TOKEN.len();

        // Key runs to the header's closing bracket. No bracket anywhere
        // ahead means no later header can complete either.
        let Some(key_len) = text[key_start..].find(']') else {
            break;
        };
        let key = text[key_start..key_start + key_len].trim();

        // The bracketed title must follow, separated only by whitespace.
        let after_key = key_start + key_len + 1;
        let ws = text[after_key..].len() - text[after_key..].trim_start().len();
        let title_open = after_key + ws;
        if !text[title_open..].starts_with('[') {
            pos = key_start;
            continue;
        }
        let title_start = title_open + 1;
        let Some(title_len) = text[title_start..].find(']') else {
            pos = key_start;
            continue;
        };
        let title = text[title_start..title_start + title_len].trim();

        // Body is everything up to the nearest terminator. Unterminated
        // sections are dropped, not emitted partially.
        let body_start = title_start + title_len + 1;
        let Some(body_len) = text[body_start..].find(END_TOKEN) else {
            break;
        };
        let body = text[body_start..body_start + body_len].trim();

        sections.push(ContentSection {
            key: key.to_string(),
            title: title.to_string(),
            content: body.to_string(),
        });
        pos = body_start + body_len + END_TOKEN.len();
    }

    debug!(
        component = "section_parser",
        section_count = sections.len(),
        "parsed content blob"
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let sections =
            parse_sections(Some("[SECTION: FOO] [Foo Bar]\nline1\nline2\n[END_SECTION]"));
        assert_eq!(
            sections,
            vec![ContentSection {
                key: "FOO".to_string(),
                title: "Foo Bar".to_string(),
                content: "line1\nline2".to_string(),
            }]
        );
    }

    #[test]
    fn test_none_and_empty_input() {
        assert!(parse_sections(None).is_empty());
        assert!(parse_sections(Some("")).is_empty());
    }

    #[test]
    fn test_no_markers_is_empty_not_error() {
        assert!(parse_sections(Some("no markers here")).is_empty());
    }

    #[test]
    fn test_multiple_sections_in_order() {
        let blob = "\
[SECTION: SUMMARY] [Summary]
The cell is the basic unit of life.
[END_SECTION]
[SECTION: KEY_TERMS] [Key Terms]
mitosis, meiosis
[END_SECTION]";
        let sections = parse_sections(Some(blob));
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key, "SUMMARY");
        assert_eq!(sections[1].key, "KEY_TERMS");
        assert_eq!(sections[1].content, "mitosis, meiosis");
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let blob = "preamble chatter\n[SECTION: A] [Alpha]\nbody\n[END_SECTION]\ntrailing chatter";
        let sections = parse_sections(Some(blob));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "body");
    }

    #[test]
    fn test_unterminated_section_dropped() {
        let sections = parse_sections(Some("[SECTION: A] [Alpha]\nbody with no end"));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_unterminated_section_swallows_next_header() {
        // The body runs to the nearest terminator even across a later
        // header: section A captures B's header line inside its body.
        let blob = "\
[SECTION: A] [Alpha]
alpha body
[SECTION: B] [Beta]
beta body
[END_SECTION]";
        let sections = parse_sections(Some(blob));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "A");
        assert!(sections[0].content.contains("[SECTION: B] [Beta]"));
        assert!(sections[0].content.ends_with("beta body"));
    }

    #[test]
    fn test_malformed_header_skipped_scanning_continues() {
        let blob = "[SECTION: BROKEN] no title here\n[SECTION: OK] [Okay]\nbody\n[END_SECTION]";
        let sections = parse_sections(Some(blob));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "OK");
    }

    #[test]
    fn test_key_format_not_validated() {
        let sections = parse_sections(Some("[SECTION: lower case] [Title]\nx\n[END_SECTION]"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, "lower case");
    }

    #[test]
    fn test_key_and_title_trimmed() {
        let sections = parse_sections(Some("[SECTION:  FOO  ] [  Foo Bar  ]\nx\n[END_SECTION]"));
        assert_eq!(sections[0].key, "FOO");
        assert_eq!(sections[0].title, "Foo Bar");
    }

    #[test]
    fn test_empty_body() {
        let sections = parse_sections(Some("[SECTION: A] [Alpha][END_SECTION]"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn test_title_on_next_line() {
        // The separator between key and title brackets is any whitespace,
        // newlines included.
        let sections = parse_sections(Some("[SECTION: A]\n[Alpha]\nbody\n[END_SECTION]"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Alpha");
    }

    #[test]
    fn test_multibyte_content_survives() {
        let sections =
            parse_sections(Some("[SECTION: TAGALOG] [Wika]\nAraw-araw mag-aral — 100%\n[END_SECTION]"));
        assert_eq!(sections[0].content, "Araw-araw mag-aral — 100%");
    }
}
