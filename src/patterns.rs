//! Default denoising lists and compiled text patterns.
//!
//! The lists are the defaults behind [`crate::Options`]; order matters for
//! the selector list and the container list.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Denoising
// =============================================================================

/// Tags removed unconditionally, descendants included.
///
/// Scripts and styles, embedded frames and vector graphics, form controls,
/// and the page-chrome landmarks (`nav`, `header`, `footer`, `aside`).
pub const JUNK_TAGS: &[&str] = &[
    "script", "style", "iframe", "svg", "form", "input", "button", "select", "textarea",
    "nav", "header", "footer", "aside",
];

/// Class/id selectors for non-article blocks, applied in this order.
///
/// Ad patterns are anchored (`^=`, `" ad-"`, exact class) because a bare
/// `*="ad-"` would also hit classes like `lead-in` or `head-line`.
pub const JUNK_SELECTORS: &[&str] = &[
    // Advertising
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    "[class^=\"ad-\"]",
    "[class*=\" ad-\"]",
    "[id^=\"ad-\"]",
    "[class*=\"sponsor\"]",
    "[class*=\"promo\"]",
    // Sidebars
    "[class*=\"sidebar\"]",
    "[id*=\"sidebar\"]",
    // Comments
    "[class*=\"comment\"]",
    "[id*=\"comment\"]",
    // Related content
    "[class*=\"related\"]",
    "[class*=\"recommended\"]",
    "[class*=\"read-more\"]",
    // Newsletter sign-ups
    "[class*=\"newsletter\"]",
    "[class*=\"subscribe\"]",
    // Social sharing
    "[class*=\"social\"]",
    "[class*=\"share\"]",
    // Cookie banners and popups
    "[class*=\"cookie\"]",
    "[id*=\"cookie\"]",
    "[class*=\"consent\"]",
    "[class*=\"popup\"]",
    "[class*=\"modal\"]",
];

// =============================================================================
// Container selection
// =============================================================================

/// Article-root candidates in priority order. The document body is the
/// implicit last resort and is not part of this list.
pub const CONTAINER_SELECTORS: &[&str] = &[
    "article",
    "main",
    ".post-content",
    ".entry-content",
    "#content",
    "#main",
];

// =============================================================================
// Text thresholds
// =============================================================================

/// Paragraph extraction is used only when the container holds more than
/// this many `<p>` elements.
pub const MIN_PARAGRAPHS: usize = 3;

/// A paragraph is kept when its trimmed length exceeds this many characters.
pub const MIN_PARAGRAPH_CHARS: usize = 40;

// =============================================================================
// Text cleaning
// =============================================================================

/// Runs of two or more whitespace characters. A single whitespace
/// character (including a lone newline) is left alone.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("WHITESPACE_RUN regex"));

/// Leading ```json / ``` fence and trailing ``` around a model response.
pub static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(?:json)?\s*(.*?)\s*```$").expect("CODE_FENCE regex")
});
