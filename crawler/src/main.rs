use anyhow::Result;
use clap::Parser;
use crawler::{MediumScraper, ScraperConfig};
use ngram_core::tokenizer::generate_ngrams;
use ngram_core::Fetcher;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Fetch a Medium article and print the text that would be indexed")]
struct Cli {
    /// Article URL (https://medium.com/... or a medium.com subdomain)
    url: String,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent string sent with the request
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Cli::parse();

    let mut config = ScraperConfig { timeout: Duration::from_secs(args.timeout_secs), ..Default::default() };
    if let Some(ua) = args.user_agent {
        config.user_agent = ua;
    }
    let scraper = MediumScraper::new(&config)?;

    let text = scraper.fetch(&args.url)?;
    tracing::info!(url = %args.url, chars = text.len(), ngrams = generate_ngrams(&text).len(), "fetched article");
    println!("{}", text.trim());
    Ok(())
}
