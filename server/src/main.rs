use anyhow::Result;
use clap::Parser;
use crawler::{MediumScraper, ScraperConfig};
use ngram_core::{Fetcher, SearchConfig, SearchEngine};
use server::{build_app, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Article URL to index at startup (repeatable)
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
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut engine = SearchEngine::new(SearchConfig::resolve(args.config.as_deref(), args.min_percent, args.max_results)?)?;
    let scraper_config = ScraperConfig { timeout: Duration::from_secs(args.timeout_secs), ..Default::default() };
    // the blocking http client has to be created and dropped outside the async runtime
    let scraper: Arc<dyn Fetcher + Send + Sync> = Arc::new(MediumScraper::new(&scraper_config)?);

    for url in &args.preload {
        match engine.add_document(url, &scraper) {
            Ok(ngrams) => tracing::info!(%url, ngrams, "preloaded article"),
            Err(e) => tracing::warn!(%url, error = %e, "skipping preload"),
        }
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let state = AppState::new(engine, scraper.clone());
    tokio::runtime::Runtime::new()?.block_on(serve(addr, state))?;
    drop(scraper);
    Ok(())
}

async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = build_app(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
