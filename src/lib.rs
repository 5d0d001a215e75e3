//! # news-digest
//!
//! Pulls the readable article text out of a web page and hands it to a
//! language model for a neutral bulleted summary and a political-lean
//! score.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_digest::extract;
//!
//! let html = r#"<html><body>
//!   <nav>Home | World | Sport</nav>
//!   <article><p>The bridge reopened on Monday.</p></article>
//!   <div class="newsletter">Sign up today!</div>
//! </body></html>"#;
//!
//! assert_eq!(extract(html), "The bridge reopened on Monday.");
//! ```
//!
//! ## Features
//!
//! - **Content Extraction**: junk tag and selector removal, container
//!   priority, paragraph filtering with a whole-text fallback
//! - **Fetching** (`client`): page download through a pass-through proxy
//! - **Summarization** (`client`): summary, lean score and key figures
//!   from a hosted model

mod error;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Article content extraction (denoising, container choice, text).
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Summary, lean score and key figure types.
pub mod analysis;

/// Page fetching.
pub mod fetch;

/// Summarization service client.
pub mod summarize;

/// Input validation and the fetch → extract → summarize flow.
pub mod pipeline;

// Public API - re-exports
pub use analysis::{Analysis, KeyFigure, Lean, PoliticalScore};
pub use error::{Error, Result};
pub use extractor::{ContainerSource, Extraction, Extractor, TextSource};
pub use options::Options;
pub use pipeline::{Digest, DigestSource, Input, Pipeline, PreparedText};

#[cfg(feature = "client")]
pub use fetch::Fetcher;
#[cfg(feature = "client")]
pub use summarize::GeminiSummarizer;

/// Extracts article text from an HTML string using default options.
///
/// Never fails. An empty result means nothing readable was found; callers
/// should report that as an extraction failure.
///
/// # Example
///
/// ```rust
/// use news_digest::extract;
///
/// let html = "<html><body><main><p>Content</p></main></body></html>";
/// assert_eq!(extract(html), "Content");
/// ```
#[must_use]
pub fn extract(html: &str) -> String {
    extract_with_options(html, &Options::default())
}

/// Extracts article text from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use news_digest::{extract_with_options, Options};
///
/// let html = "<html><body><div class=\"story\"><p>Content</p></div></body></html>";
/// let options = Options {
///     container_selectors: vec![".story".to_string()],
///     ..Options::default()
/// };
/// assert_eq!(extract_with_options(html, &options), "Content");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> String {
    Extractor::new(options.clone()).extract_owned(dom::parse(html))
}

/// Extracts article text from HTML bytes with automatic encoding detection.
///
/// The charset comes from a byte-order mark or a `<meta>` declaration and
/// defaults to UTF-8.
///
/// # Example
///
/// ```rust
/// use news_digest::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article>Caf\xE9</article></body></html>";
/// assert_eq!(extract_bytes(html), "Café");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> String {
    extract(&encoding::decode_html(html, None))
}
