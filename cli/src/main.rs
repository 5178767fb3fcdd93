use anyhow::Result;
use clap::Parser;
use crawler::{MediumScraper, ScraperConfig};
use ngram_core::{SearchConfig, SearchEngine};
use ngram_cli::Shell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ngram")]
#[command(about = "Index Medium articles and search them by 5-gram overlap", long_about = None)]
struct Args {
    /// Article URL to index before the first prompt (repeatable)
    #[arg(long)]
    preload: Vec<String>,
    /// JSON search config, e.g. {"min_percent_match": 70, "max_results": 5}
    #[arg(long)]
    config: Option<PathBuf>,
    /// Results must match strictly more than this percentage of query n-grams [default: 65]
    #[arg(long)]
    min_percent: Option<f32>,
    /// Maximum number of results per search [default: 10]
    #[arg(long)]
    max_results: Option<usize>,
    /// Request timeout seconds when fetching articles
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent string sent when fetching articles
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let engine = SearchEngine::new(SearchConfig::resolve(args.config.as_deref(), args.min_percent, args.max_results)?)?;
    let mut scraper_config = ScraperConfig { timeout: Duration::from_secs(args.timeout_secs), ..Default::default() };
    if let Some(ua) = args.user_agent {
        scraper_config.user_agent = ua;
    }
    let scraper = MediumScraper::new(&scraper_config)?;

    let mut shell = Shell::new(engine, scraper);
    shell.preload(&args.preload);
    tracing::info!(documents = shell.engine().len(), "ready");

    shell.run(io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}
