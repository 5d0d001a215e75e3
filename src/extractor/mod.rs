//! Main content extraction module.
//!
//! Turns a parsed page into plain article text in four steps:
//!
//! 1. remove junk tags (scripts, styles, page chrome, form controls)
//! 2. remove junk selectors (ads, sidebars, comments, share widgets, ...)
//! 3. choose the article root by a fixed priority, falling back to `<body>`
//! 4. join the long paragraphs, or collapse the whole container's text
//!
//! # Module Structure
//!
//! - `denoise`: the two removal passes
//! - `container`: article-root selection
//! - `text`: paragraph join and container fallback
//!
//! # Mutation
//!
//! The removal passes edit the tree they are given. [`Extractor::extract`]
//! therefore runs them on a deep copy and leaves the caller's document
//! untouched; [`Extractor::extract_owned`] takes the document by value and
//! edits it directly.
//!
//! # Usage
//!
//! ```rust
//! use news_digest::{dom, Extractor, Options};
//!
//! let doc = dom::parse("<body><nav>Menu</nav><main><p>Short story.</p></main></body>");
//! let extractor = Extractor::new(Options::default());
//!
//! assert_eq!(extractor.extract(&doc), "Short story.");
//! // The caller's document still has its navigation
//! assert!(doc.select("nav").exists());
//! ```

pub mod container;
pub mod denoise;
pub mod text;

use serde::Serialize;

use crate::dom::{self, Document};
use crate::options::Options;

pub use container::{select_container, ContainerSource};
pub use denoise::{denoise, DenoiseReport};
pub use text::{collapse_whitespace, extract_text, TextSource};

/// Extracted text together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// The article text. May be empty.
    pub text: String,

    /// Which element served as the article root.
    pub container: ContainerSource,

    /// Which branch produced `text`; `None` when there was no container.
    pub text_source: Option<TextSource>,

    /// What the denoising passes removed.
    #[serde(skip)]
    pub denoise: DenoiseReport,
}

impl Extraction {
    /// Whether the text is empty or whitespace-only.
    ///
    /// Callers should treat this as a content-extraction failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Article content extractor.
///
/// Holds the configuration only; it has no state between calls and can
/// be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    /// Create an extractor with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options this extractor runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Extract article text without modifying `doc`.
    ///
    /// Never fails; returns an empty string when nothing usable is found.
    #[must_use]
    pub fn extract(&self, doc: &Document) -> String {
        self.extract_detailed(doc).text
    }

    /// Extract article text from a document the caller gives up.
    ///
    /// Skips the deep copy made by [`Extractor::extract`].
    #[must_use]
    pub fn extract_owned(&self, doc: Document) -> String {
        self.run(&doc).text
    }

    /// Like [`Extractor::extract`], but also reports the container, the
    /// text branch and what was removed.
    #[must_use]
    pub fn extract_detailed(&self, doc: &Document) -> Extraction {
        let working = dom::clone_document(doc);
        self.run(&working)
    }

    /// Run all steps on `doc`, removing junk from it in place.
    fn run(&self, doc: &Document) -> Extraction {
        let opts = &self.options;
        let report = denoise(doc, &opts.junk_tags, &opts.junk_selectors);

        let (container, source) = select_container(doc, &opts.container_selectors);
        let Some(container) = container else {
            tracing::debug!("no container and no body; returning empty text");
            return Extraction {
                text: String::new(),
                container: source,
                text_source: None,
                denoise: report,
            };
        };

        let (text, text_source) =
            extract_text(&container, opts.min_paragraphs, opts.min_paragraph_chars);

        Extraction {
            text,
            container: source,
            text_source: Some(text_source),
            denoise: report,
        }
    }
}
