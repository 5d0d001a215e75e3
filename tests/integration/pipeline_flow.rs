//! Pipeline tests with in-memory collaborators

use news_digest::fetch::HtmlFetcher;
use news_digest::summarize::{parse_analysis, Summarizer};
use news_digest::{Analysis, DigestSource, Error, Extractor, Input, Lean, Pipeline, Result};
use url::Url;

const PAGE: &str = r#"<html><body>
    <nav>Home | Politics | Sport</nav>
    <article>
        <p>The senate confirmed the new trade representative by a narrow margin on Thursday.</p>
        <p>Supporters praised her experience negotiating agreements with regional partners.</p>
        <p>Opponents questioned her past lobbying work for agricultural exporters abroad.</p>
        <p>She starts next week.</p>
    </article>
</body></html>"#;

struct PageFetcher(&'static str);

#[async_trait::async_trait]
impl HtmlFetcher for PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        if url.host_str() == Some("blocked.example") {
            return Err(Error::FetchStatus(451));
        }
        Ok(self.0.to_string())
    }
}

/// Replies with a canned model response, echoing the input length into the summary.
struct CannedModel(&'static str);

#[async_trait::async_trait]
impl Summarizer for CannedModel {
    async fn summarize(&self, text: &str) -> Result<Analysis> {
        let mut analysis = parse_analysis(self.0)?;
        analysis.summary = format!("{}\n* ({} chars in)", analysis.summary, text.len());
        Ok(analysis)
    }
}

const MODEL_REPLY: &str = r#"```json
{
  "summary": "* The senate confirmed a new trade representative.\n* The vote was narrow.",
  "politicalScore": 15,
  "keyFigures": [{"name": "Jane Smith", "role": "Trade Representative"}]
}
```"#;

fn pipeline() -> Pipeline<PageFetcher, CannedModel> {
    Pipeline::new(Extractor::default(), PageFetcher(PAGE), CannedModel(MODEL_REPLY))
}

#[tokio::test]
async fn url_digest_end_to_end() {
    let digest = pipeline()
        .run(&Input::Url("https://news.example/senate-vote".to_string()))
        .await
        .expect("digest");

    let DigestSource::Url { url, extraction } = &digest.source else {
        panic!("expected URL source, got {:?}", digest.source);
    };
    assert_eq!(url, "https://news.example/senate-vote");
    assert_eq!(extraction.text, digest.extracted_text);

    assert!(digest.extracted_text.starts_with("The senate confirmed"));
    assert!(!digest.extracted_text.contains("Politics"));
    assert!(!digest.extracted_text.contains("next week"));

    assert_eq!(digest.analysis.political_score.value(), 10.0);
    assert_eq!(digest.analysis.political_score.lean(), Lean::Right);
    assert_eq!(digest.analysis.key_figures.len(), 1);
    assert_eq!(digest.analysis.bullets().len(), 3);
}

#[tokio::test]
async fn prepare_only_skips_summarizer() {
    let prepared = pipeline()
        .prepare(&Input::Url("https://news.example/a".to_string()))
        .await
        .expect("prepared");
    assert_eq!(prepared.text.split("\n\n").count(), 3);
}

#[tokio::test]
async fn blocked_fetch_surfaces_status() {
    let err = pipeline()
        .run(&Input::Url("https://blocked.example/story".to_string()))
        .await
        .expect_err("blocked");
    assert!(matches!(err, Error::FetchStatus(451)));
    assert!(err.to_string().contains("451"));
}

#[tokio::test]
async fn digest_serializes_to_json() {
    let digest = pipeline()
        .run(&Input::Text("Some pasted article text.".to_string()))
        .await
        .expect("digest");
    let json = serde_json::to_value(&digest).expect("json");

    assert_eq!(json["source"]["kind"], "text");
    assert_eq!(json["extractedText"], "Some pasted article text.");
    assert_eq!(json["analysis"]["politicalScore"], 10.0);
    assert_eq!(json["analysis"]["keyFigures"][0]["name"], "Jane Smith");
}
