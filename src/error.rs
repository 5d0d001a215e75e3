//! Error types for news-digest.
//!
//! Content extraction itself is infallible (an empty string is a valid
//! result). These errors cover the collaborators around it: input
//! validation, fetching, and summarization.

/// Error type for digest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user supplied nothing to work with.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// The supplied URL could not be parsed.
    #[error("The provided URL is not valid. Please check and try again.")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured proxy prefix does not form a valid URL.
    #[error("The configured proxy prefix {prefix:?} is not a valid URL: {source}")]
    InvalidProxy {
        /// Prefix as configured.
        prefix: String,
        /// Parse failure for `<prefix><encoded target>`.
        source: url::ParseError,
    },

    /// The fetch returned a non-success HTTP status.
    #[error("Failed to fetch URL content. Status: {0}. The resource may be unavailable or blocked.")]
    FetchStatus(u16),

    /// The fetched body exceeded the configured size cap.
    #[error("Fetched content too large: {0} bytes")]
    ContentTooLarge(usize),

    /// Transport-level HTTP failure (DNS, TLS, timeout, connection reset)
    /// while fetching a page. Summarization transport failures are
    /// reported as [`Error::Summarize`].
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Extraction produced an empty or whitespace-only string.
    #[error("Could not extract any readable content from the provided URL.")]
    NoContent,

    /// No API key was configured for the summarization service.
    #[error("API_KEY environment variable is not set.")]
    MissingApiKey,

    /// The summarization service failed or returned an unusable response.
    #[error("Failed to generate summary and analysis: {0}")]
    Summarize(String),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input from a file or stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from the network layer rather than from
    /// the content or the user's input.
    #[must_use]
    pub fn is_network(&self) -> bool {
        match self {
            Self::FetchStatus(_) | Self::ContentTooLarge(_) => true,
            #[cfg(feature = "client")]
            Self::Http(_) => true,
            _ => false,
        }
    }
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, Error>;
