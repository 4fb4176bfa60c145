//! Job notification scraper
//!
//! Runs one extraction against the listing page and prints the records as
//! JSON, or saves them to data/jobs.json

use anyhow::Context;
use clap::Parser;
use common::observability::{LogFormat, init_logging};
use jobfeed_scraper::{Extractor, ExtractorConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jobfeed-scraper", about = "Fetch the latest job notifications once")]
struct Args {
    /// Optional config file (TOML/YAML/JSON); JOBFEED__* variables still override it
    #[arg(long, env = "JOBFEED_CONFIG")]
    config: Option<PathBuf>,

    /// Save to a file instead of printing to stdout
    #[arg(long, num_args = 0..=1, default_missing_value = "data/jobs.json")]
    save: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging("info", LogFormat::from_env()).context("failed to initialise logging")?;

    let config = ExtractorConfig::load(args.config.as_deref()).context("failed to load config")?;
    eprintln!("🔍 Fetching job notifications from {}", config.source_url);

    let extractor = Extractor::new(config).context("failed to build HTTP client")?;
    let jobs = extractor.fetch_latest_jobs().await;

    eprintln!("📊 Total unique jobs found: {}", jobs.len());

    let json_output = if args.pretty {
        serde_json::to_string_pretty(&jobs)
    } else {
        serde_json::to_string(&jobs)
    }
    .context("failed to serialize jobs")?;

    match args.save {
        Some(output_path) => {
            if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(&output_path, &json_output)
                .with_context(|| format!("failed to write {}", output_path.display()))?;
            eprintln!("💾 Saved {} jobs to {:?}", jobs.len(), output_path);
        }
        None => println!("{json_output}"),
    }

    Ok(())
}
