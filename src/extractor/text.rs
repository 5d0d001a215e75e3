//! Text extraction from the chosen container.

use serde::Serialize;

use crate::dom::{self, Selection};
use crate::patterns::WHITESPACE_RUN;

/// Which branch produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Long paragraphs joined with blank lines.
    Paragraphs,
    /// Whole container text with whitespace runs collapsed.
    Container,
}

/// Extract text from `container`.
///
/// With more than `min_paragraphs` `<p>` elements, paragraphs whose
/// trimmed text is longer than `min_paragraph_chars` characters are joined
/// with `"\n\n"`. The branch is chosen on the raw count, so the join may
/// come out empty when every paragraph is short.
///
/// Otherwise the container's full text is used with every run of two or
/// more whitespace characters replaced by one space, then trimmed.
#[must_use]
pub fn extract_text(
    container: &Selection,
    min_paragraphs: usize,
    min_paragraph_chars: usize,
) -> (String, TextSource) {
    let paragraphs = container.select("p");
    let count = paragraphs.length();

    if count > min_paragraphs {
        let kept: Vec<String> = paragraphs
            .nodes()
            .iter()
            .map(|node| node.text())
            .filter_map(|text| {
                let trimmed = text.trim();
                (trimmed.chars().count() > min_paragraph_chars).then(|| trimmed.to_string())
            })
            .collect();

        tracing::debug!(paragraphs = count, kept = kept.len(), "paragraph extraction");
        return (kept.join("\n\n"), TextSource::Paragraphs);
    }

    tracing::debug!(paragraphs = count, "container text fallback");
    (collapse_whitespace(&dom::text_content(container)), TextSource::Container)
}

/// Replace each run of two or more whitespace characters with one space
/// and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
