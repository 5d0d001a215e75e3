//! news-digest command line
//!
//! Summarize pasted text or a web page and score its political lean.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use news_digest::fetch::{FetchConfig, DEFAULT_PROXY};
use news_digest::summarize::SummarizerConfig;
use news_digest::{
    Digest, DigestSource, Extractor, Fetcher, GeminiSummarizer, Input, Options, Pipeline,
};

/// Neutral summaries and lean scores for news articles
#[derive(Parser, Debug)]
#[command(name = "news-digest")]
#[command(version)]
#[command(about = "Summarize an article and estimate its political lean")]
#[command(group(ArgGroup::new("source").required(true).args(["url", "text", "file"])))]
struct Args {
    /// Article URL to fetch
    #[arg(short, long)]
    url: Option<String>,

    /// Article text to summarize
    #[arg(short, long)]
    text: Option<String>,

    /// Read article text from a file ("-" for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the text that would be summarized and stop
    #[arg(long)]
    extract_only: bool,

    /// Fetch the URL directly instead of through the proxy
    #[arg(long, conflicts_with = "proxy")]
    no_proxy: bool,

    /// Proxy prefix the encoded URL is appended to
    #[arg(long, default_value = DEFAULT_PROXY)]
    proxy: String,

    /// Model name (overrides NEWS_DIGEST_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Print the digest as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn input(&self) -> news_digest::Result<Input> {
        if let Some(url) = &self.url {
            return Ok(Input::Url(url.clone()));
        }
        if let Some(text) = &self.text {
            return Ok(Input::Text(text.clone()));
        }
        let mut text = String::new();
        match self.file.as_deref() {
            Some(path) if path.as_os_str() != "-" => text = std::fs::read_to_string(path)?,
            _ => {
                std::io::stdin().read_to_string(&mut text)?;
            }
        }
        Ok(Input::Text(text))
    }

    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            proxy: (!self.no_proxy).then(|| self.proxy.clone()),
            ..FetchConfig::default()
        }
    }
}

/// Summarizer used with `--extract-only`, where no API key is needed.
struct Unused;

#[async_trait::async_trait]
impl news_digest::summarize::Summarizer for Unused {
    async fn summarize(&self, _text: &str) -> news_digest::Result<news_digest::Analysis> {
        Err(news_digest::Error::MissingApiKey)
    }
}

fn render(digest: &Digest) {
    if let DigestSource::Url { url, .. } = &digest.source {
        println!("Source: {url}\n");
    }

    println!("Summary");
    for bullet in digest.analysis.bullets() {
        println!("  • {bullet}");
    }

    let score = digest.analysis.political_score;
    println!("\nSource Analysis: {score} ({})", score.lean());
    println!("  {}", gauge(score.gauge_percent(), 41));
    println!("  Left-Leaning{:>12}{:>17}", "Center", "Right-Leaning");

    if !digest.analysis.key_figures.is_empty() {
        println!("\nKey Figures");
        for figure in &digest.analysis.key_figures {
            println!("  {} ({})", figure.name, figure.role);
        }
    }
}

/// Text gauge with a marker at `percent` of `width`.
fn gauge(percent: f64, width: usize) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pos = ((percent / 100.0) * (width - 1) as f64).round() as usize;
    (0..width)
        .map(|i| if i == pos.min(width - 1) { '●' } else { '─' })
        .collect()
}

async fn run(args: Args) -> news_digest::Result<()> {
    let input = args.input()?;
    let extractor = Extractor::new(Options::default());
    let fetcher = Fetcher::new(args.fetch_config())?;

    if args.extract_only {
        let pipeline = Pipeline::new(extractor, fetcher, Unused);
        let prepared = pipeline.prepare(&input).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&prepared)?);
        } else {
            println!("{}", prepared.text);
        }
        return Ok(());
    }

    let mut config = SummarizerConfig::from_env()?;
    if let Some(model) = &args.model {
        config.model.clone_from(model);
    }
    let pipeline = Pipeline::new(extractor, fetcher, GeminiSummarizer::new(config)?);
    let digest = pipeline.run(&input).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&digest)?);
    } else {
        render(&digest);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "news_digest=debug" } else { "news_digest=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "digest failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
