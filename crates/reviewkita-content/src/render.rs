//! Line classification for section bodies.

use reviewkita_core::ContentLine;

/// Split a section body into display lines.
///
/// Each source line stands alone: a blank line becomes a break, a non-blank
/// line becomes its own trimmed paragraph block. Consecutive non-blank lines
/// are NOT merged — the upstream generator relies on line-by-line layout for
/// lists and term/definition pairs.
pub fn render_lines(body: &str) -> Vec<ContentLine> {
    body.lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                ContentLine::Break
            } else {
                ContentLine::Paragraph(trimmed.to_string())
            }
        })
        .collect()
}
