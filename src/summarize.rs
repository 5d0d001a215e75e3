//! Summarization and lean scoring through a hosted language model.
//!
//! [`GeminiSummarizer`] talks to the Generative Language REST API
//! (`models/{model}:generateContent`) with a JSON response schema, then
//! parses and clamps the result into an [`Analysis`].

use serde::Deserialize;

use crate::analysis::Analysis;
use crate::error::{Error, Result};
use crate::patterns::CODE_FENCE;

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "NEWS_DIGEST_MODEL";

/// Instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert summarizer and political analyst. Perform three actions on the given text:
1. Produce a concise, neutral summary as a simple bulleted list. Each bullet is one key fact. \
Remove loaded language, emotional appeals and opinions.
2. Score the political leaning of the original text from -10 (very left-leaning) to 10 \
(very right-leaning), with 0 being neutral or centrist.
3. Identify up to 5 key public figures mentioned in the text, with their full name and a \
2-4 word role based on the context.

The text may still contain fragments of advertisements, navigation menus, \"read more\" links \
or related-article headers. Ignore them and focus only on the main story.

Return only a JSON object of the form \
{\"summary\": string, \"politicalScore\": number, \"keyFigures\": [{\"name\": string, \"role\": string}]}.";

/// Turns article text into an [`Analysis`].
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` and score its political lean.
    async fn summarize(&self, text: &str) -> Result<Analysis>;
}

/// Configuration for [`GeminiSummarizer`].
#[derive(Clone)]
pub struct SummarizerConfig {
    /// API key sent as `x-goog-api-key`.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// API base URL, without trailing slash.
    pub endpoint: String,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl SummarizerConfig {
    /// Config with the given key and default model settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Read the key from `API_KEY` and the optional model override from
    /// `NEWS_DIGEST_MODEL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        Ok(config)
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model)
    }

    /// JSON request body for `text`.
    #[must_use]
    pub fn request_body(&self, text: &str) -> serde_json::Value {
        serde_json::json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": text }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "summary": { "type": "STRING" },
                        "politicalScore": { "type": "NUMBER" },
                        "keyFigures": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "role": { "type": "STRING" }
                                },
                                "required": ["name", "role"]
                            }
                        }
                    },
                    "required": ["summary", "politicalScore", "keyFigures"]
                }
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull the model's text out of a `generateContent` response body.
pub fn response_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or_else(|| Error::Summarize("response contained no text".to_string()))
}

/// Parse the model's JSON answer, tolerating a ```json fence around it.
pub fn parse_analysis(raw: &str) -> Result<Analysis> {
    let trimmed = raw.trim();
    let json = CODE_FENCE
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map_or(trimmed, |m| m.as_str());
    serde_json::from_str(json).map_err(|err| Error::Summarize(format!("invalid analysis JSON: {err}")))
}

/// [`Summarizer`] backed by the Generative Language API.
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct GeminiSummarizer {
    client: reqwest::Client,
    config: SummarizerConfig,
}

#[cfg(feature = "client")]
impl GeminiSummarizer {
    /// Create a summarizer.
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build().map_err(transport_error)?;
        Ok(Self { client, config })
    }

    /// Create a summarizer configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(SummarizerConfig::from_env()?)
    }
}

#[cfg(feature = "client")]
#[async_trait::async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, text: &str) -> Result<Analysis> {
        tracing::debug!(model = %self.config.model, chars = text.chars().count(), "requesting analysis");

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.config.request_body(text))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "summarization request failed");
            return Err(Error::Summarize(format!("service returned status {}", status.as_u16())));
        }

        parse_analysis(&response_text(&body)?)
    }
}

/// Keep summarization transport failures apart from page-fetch ones.
#[cfg(feature = "client")]
fn transport_error(err: reqwest::Error) -> Error {
    tracing::warn!(error = %err, "summarization request did not complete");
    Error::Summarize(format!("request failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_url_includes_model() {
        let config = SummarizerConfig::new("k");
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_carries_text_and_schema() {
        let body = SummarizerConfig::new("k").request_body("Article text");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Article text");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            serde_json::json!(["summary", "politicalScore", "keyFigures"])
        );
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", SummarizerConfig::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn response_text_takes_first_text_part() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"summary\":\"s\",\"politicalScore\":1}"}]}}]}"#;
        assert_eq!(response_text(body).unwrap(), r#"{"summary":"s","politicalScore":1}"#);
    }

    #[test]
    fn response_without_candidates_is_an_error() {
        assert!(matches!(response_text(r#"{"candidates":[]}"#), Err(Error::Summarize(_))));
        assert!(matches!(response_text("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn parse_analysis_accepts_fenced_json() {
        let raw = "```json\n{\"summary\": \"* Fact\", \"politicalScore\": 14, \"keyFigures\": []}\n```";
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.summary, "* Fact");
        assert_eq!(analysis.political_score.value(), 10.0);
    }

    #[test]
    fn parse_analysis_rejects_garbage() {
        assert!(matches!(parse_analysis("I cannot help with that."), Err(Error::Summarize(_))));
    }

    #[cfg(feature = "client")]
    #[tokio::test]
    async fn unreachable_service_is_a_summarize_error() {
        // Bind then drop to get a local port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = SummarizerConfig {
            endpoint: format!("http://{addr}/v1beta"),
            ..SummarizerConfig::new("test-key")
        };
        let err = GeminiSummarizer::new(config).unwrap().summarize("text").await.unwrap_err();

        assert!(matches!(err, Error::Summarize(ref msg) if msg.starts_with("request failed")));
        assert!(!err.is_network());
    }
}
