//! Page fetching through an optional CORS-style pass-through proxy.
//!
//! The proxy is a URL prefix; the target URL is percent-encoded and
//! appended to it (`https://api.allorigins.win/raw?url=` by default).

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};
#[cfg(feature = "client")]
use crate::encoding;

/// Default pass-through proxy prefix.
pub const DEFAULT_PROXY: &str = "https://api.allorigins.win/raw?url=";

/// Configuration for [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Proxy prefix; `None` fetches the target directly.
    pub proxy: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Largest accepted body, in bytes.
    pub max_content_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            proxy: Some(DEFAULT_PROXY.to_string()),
            timeout: Duration::from_secs(30),
            user_agent: concat!("news-digest/", env!("CARGO_PKG_VERSION")).to_string(),
            max_content_size: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl FetchConfig {
    /// The URL actually requested for `target`.
    pub fn request_url(&self, target: &Url) -> Result<Url> {
        match &self.proxy {
            Some(prefix) => proxied_url(prefix, target),
            None => Ok(target.clone()),
        }
    }
}

/// Build `<prefix><percent-encoded target>`.
pub fn proxied_url(prefix: &str, target: &Url) -> Result<Url> {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_str().as_bytes()).collect();
    Url::parse(&format!("{prefix}{encoded}")).map_err(|source| Error::InvalidProxy {
        prefix: prefix.to_string(),
        source,
    })
}

/// Source of raw page HTML.
#[async_trait::async_trait]
pub trait HtmlFetcher: Send + Sync {
    /// Fetch the HTML for `url` as UTF-8 text.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// HTTP fetcher backed by `reqwest`.
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

#[cfg(feature = "client")]
impl Fetcher {
    /// Create a fetcher.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this fetcher was built with.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[cfg(feature = "client")]
#[async_trait::async_trait]
impl HtmlFetcher for Fetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let request_url = self.config.request_url(url)?;
        tracing::debug!(target_url = %url, request_url = %request_url, "fetching page");

        let mut response = self.client.get(request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus(status.as_u16()));
        }

        if let Some(len) = response.content_length() {
            let len = usize::try_from(len).unwrap_or(usize::MAX);
            if len > self.config.max_content_size {
                return Err(Error::ContentTooLarge(len));
            }
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Content-Length is absent on chunked responses, so the cap is
        // enforced while reading as well.
        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > self.config.max_content_size {
                return Err(Error::ContentTooLarge(bytes.len()));
            }
        }

        tracing::debug!(bytes = bytes.len(), content_type = ?content_type, "fetched page");
        Ok(encoding::decode_html(&bytes, content_type.as_deref()))
    }
}
