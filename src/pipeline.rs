//! End-to-end flow: validate input, fetch and extract when given a URL,
//! then summarize.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::analysis::Analysis;
use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{Extraction, Extractor};
use crate::fetch::HtmlFetcher;
use crate::summarize::Summarizer;

/// What the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Pasted article text, summarized as-is.
    Text(String),
    /// Address of a page to fetch and extract.
    Url(String),
}

/// Where the summarized text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DigestSource {
    /// Pasted text.
    Text,
    /// A fetched page.
    Url {
        /// The validated page URL.
        url: String,
        /// How the article text was located.
        extraction: Extraction,
    },
}

/// Text ready for summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedText {
    /// Where it came from.
    pub source: DigestSource,
    /// The text itself, never empty.
    pub text: String,
}

/// A finished digest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    /// Where the text came from.
    pub source: DigestSource,
    /// The text that was sent for summarization.
    pub extracted_text: String,
    /// Summary, lean score and key figures.
    pub analysis: Analysis,
    /// When the analysis completed.
    pub created_at: DateTime<Utc>,
}

/// Runs the digest flow with the given collaborators.
pub struct Pipeline<F, S> {
    extractor: Extractor,
    fetcher: F,
    summarizer: S,
}

impl<F: HtmlFetcher, S: Summarizer> Pipeline<F, S> {
    /// Create a pipeline.
    pub fn new(extractor: Extractor, fetcher: F, summarizer: S) -> Self {
        Self {
            extractor,
            fetcher,
            summarizer,
        }
    }

    /// Validate `input` and produce the text to summarize.
    ///
    /// For URL input this fetches the page and extracts the article. An
    /// empty extraction is [`Error::NoContent`], separate from the network
    /// errors the fetch may raise.
    pub async fn prepare(&self, input: &Input) -> Result<PreparedText> {
        match input {
            Input::Text(text) => {
                if text.trim().is_empty() {
                    return Err(Error::EmptyInput("Please enter some text to summarize."));
                }
                Ok(PreparedText {
                    source: DigestSource::Text,
                    text: text.clone(),
                })
            }
            Input::Url(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(Error::EmptyInput("Please enter a URL to summarize."));
                }
                let url = Url::parse(raw)?;

                tracing::info!(url = %url, "fetching content from URL");
                let html = self.fetcher.fetch(&url).await?;

                tracing::info!(bytes = html.len(), "content retrieved, parsing article");
                let extraction = self.extractor.extract_detailed(&dom::parse(&html));
                if extraction.is_empty() {
                    return Err(Error::NoContent);
                }

                Ok(PreparedText {
                    text: extraction.text.clone(),
                    source: DigestSource::Url {
                        url: url.to_string(),
                        extraction,
                    },
                })
            }
        }
    }

    /// Prepare `input` and summarize it.
    pub async fn run(&self, input: &Input) -> Result<Digest> {
        let prepared = self.prepare(input).await?;

        tracing::info!(chars = prepared.text.chars().count(), "content extracted, analyzing");
        let analysis = self.summarizer.summarize(&prepared.text).await?;

        Ok(Digest {
            source: prepared.source,
            extracted_text: prepared.text,
            analysis,
            created_at: Utc::now(),
        })
    }
}
