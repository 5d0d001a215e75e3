/// Batch extraction over a directory of saved pages.
/// Reports how often each container and text branch was used, and
/// optionally writes the extracted text next to each page.
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use news_digest::{dom, encoding, ContainerSource, Extractor, Options, TextSource};

#[derive(Parser, Debug)]
#[command(name = "extract_dir")]
#[command(about = "Extract article text from every .html file in a directory")]
struct Args {
    /// Directory containing HTML files
    dir: PathBuf,

    /// Max number of files to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Write `<name>.txt` beside each page
    #[arg(short, long)]
    write: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut entries: Vec<PathBuf> = fs::read_dir(&args.dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "html" || ext == "htm"))
        .collect();
    entries.sort();
    entries.truncate(args.limit.unwrap_or(usize::MAX));

    eprintln!("Processing {} HTML files from {}", entries.len(), args.dir.display());

    let extractor = Extractor::new(Options::default());
    let mut containers: BTreeMap<String, usize> = BTreeMap::new();
    let mut branches: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut empty = 0usize;
    let mut invalid_selectors = 0usize;
    let mut total_bytes = 0usize;

    for path in &entries {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Failed to read {}: {e}", path.display());
                continue;
            }
        };
        total_bytes += bytes.len();

        let doc = dom::parse(&encoding::decode_html(&bytes, None));
        let result = extractor.extract_detailed(&doc);

        let label = match &result.container {
            ContainerSource::Selector { selector, .. } => selector.clone(),
            ContainerSource::Body => "body".to_string(),
            ContainerSource::None => "none".to_string(),
        };
        *containers.entry(label).or_default() += 1;
        let branch = match result.text_source {
            Some(TextSource::Paragraphs) => "paragraphs",
            Some(TextSource::Container) => "container",
            None => "none",
        };
        *branches.entry(branch).or_default() += 1;
        invalid_selectors += result.denoise.invalid_selectors.len();
        if result.is_empty() {
            empty += 1;
        }

        if args.write {
            fs::write(path.with_extension("txt"), &result.text)?;
        }
    }

    eprintln!(
        "Processed {} files ({} MB): {} empty",
        entries.len(),
        total_bytes / 1_000_000,
        empty
    );
    eprintln!("Containers:");
    for (container, count) in &containers {
        eprintln!("  {container:<16} {count}");
    }
    eprintln!("Text branches:");
    for (branch, count) in &branches {
        eprintln!("  {branch:<16} {count}");
    }
    if invalid_selectors > 0 {
        eprintln!("Skipped {invalid_selectors} invalid selector applications");
    }

    Ok(())
}
