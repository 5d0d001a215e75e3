//! Configuration options for content extraction.
//!
//! The `Options` struct holds the denoising lists, the container priority
//! order, and the paragraph thresholds used by the extractor.

use crate::patterns::{
    CONTAINER_SELECTORS, JUNK_SELECTORS, JUNK_TAGS, MIN_PARAGRAPHS, MIN_PARAGRAPH_CHARS,
};

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use news_digest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Add a site-specific junk selector after the defaults
/// let mut junk = options.junk_selectors.clone();
/// junk.push(".paywall-teaser".to_string());
/// let options = Options {
///     junk_selectors: junk,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag names removed unconditionally, with their descendants.
    ///
    /// Default: [`JUNK_TAGS`]
    pub junk_tags: Vec<String>,

    /// Selectors removed in listed order after the tag pass.
    ///
    /// A selector that fails to compile is skipped; the remaining
    /// selectors still run.
    ///
    /// Default: [`JUNK_SELECTORS`]
    pub junk_selectors: Vec<String>,

    /// Article-root selectors tried in order; first match wins.
    ///
    /// The document body is always tried last and is not listed here.
    ///
    /// Default: [`CONTAINER_SELECTORS`]
    pub container_selectors: Vec<String>,

    /// Paragraph extraction is used only when the container has strictly
    /// more `<p>` elements than this.
    ///
    /// Default: `3`
    pub min_paragraphs: usize,

    /// Paragraphs whose trimmed text is this many characters or fewer are
    /// dropped from the paragraph join.
    ///
    /// Default: `40`
    pub min_paragraph_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            junk_tags: to_owned_list(JUNK_TAGS),
            junk_selectors: to_owned_list(JUNK_SELECTORS),
            container_selectors: to_owned_list(CONTAINER_SELECTORS),
            min_paragraphs: MIN_PARAGRAPHS,
            min_paragraph_chars: MIN_PARAGRAPH_CHARS,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
