//! Context-window snippet computation for search result descriptions.

use reviewkita_core::defaults::{
    ELLIPSIS, SNIPPET_CONTEXT_AFTER, SNIPPET_CONTEXT_BEFORE, SNIPPET_FALLBACK_LEN,
};

use crate::matching::find_ci;

/// Build a ~120-char context window around the first occurrence of `query`
/// in `text`.
///
/// - Query not found: the first 120 chars of `text`, unmodified (no
///   ellipsis).
/// - Found at char index `i`: chars `max(0, i-30) .. min(len, i+90)`, with
///   embedded newline runs collapsed to single spaces. An ellipsis is
///   prefixed iff the window start was clipped and suffixed iff the end
///   was, so the match sits roughly 30 chars into the window.
pub fn snippet(text: &str, query: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    let Some(hit) = find_ci(text, query) else {
        return chars.iter().take(SNIPPET_FALLBACK_LEN).collect();
    };

    let start = hit.saturating_sub(SNIPPET_CONTEXT_BEFORE);
    let end = (hit + SNIPPET_CONTEXT_AFTER).min(chars.len());
    let window: String = chars[start..end].iter().collect();

    let mut out = String::with_capacity(window.len() + 2);
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.push_str(&collapse_newlines(&window));
    if end < chars.len() {
        out.push(ELLIPSIS);
    }
    out
}

/// Replace each run of newline characters with a single space.
fn collapse_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_newline = false;
    for c in s.chars() {
        if c == '\n' || c == '\r' {
            if !in_newline {
                out.push(' ');
                in_newline = true;
            }
        } else {
            in_newline = false;
            out.push(c);
        }
    }
    out
}
