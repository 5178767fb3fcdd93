pub mod error;

use axum::{extract::{Query, State}, http::{HeaderValue, StatusCode}, routing::{get, post}, Json, Router};
use error::ApiError;
use ngram_core::tokenizer::validate_query;
use ngram_core::{Fetcher, ScoredDoc, SearchEngine};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// Defaults to, and is capped at, the engine's `max_results`.
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub results: Vec<ScoredDoc>,
}

#[derive(Deserialize)]
pub struct AddArticle {
    pub url: String,
}

#[derive(Serialize)]
pub struct AddResponse {
    pub url: String,
    pub ngrams: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub ngrams: usize,
    pub postings: usize,
}

/// The engine is not synchronized internally; every handler goes through the lock.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<SearchEngine>>,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl AppState {
    pub fn new(engine: SearchEngine, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { engine: Arc::new(RwLock::new(engine)), fetcher }
    }
}

/// Origins come from `CORS_ALLOW_ORIGIN` as a comma-separated list; an unset
/// or blank list allows any origin.
pub fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref());
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/articles", post(add_article))
        .route("/stats", get(stats_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<SearchResponse>, ApiError> {
    let start = std::time::Instant::now();
    validate_query(&params.q)?;
    let results = {
        let engine = state.engine.read();
        let k = params.k.unwrap_or(engine.config().max_results).max(1);
        engine.search_top(&params.q, k)
    };
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(query = %params.q, hits = results.len(), took_s, "search");
    Ok(Json(SearchResponse { query: params.q, took_s, results }))
}

/// Fetch and index one article. The fetch runs on the blocking pool without
/// holding the lock; only the final insert takes the write lock.
pub async fn add_article(State(state): State<AppState>, Json(body): Json<AddArticle>) -> Result<(StatusCode, Json<AddResponse>), ApiError> {
    let url = body.url.trim().to_string();
    if url.is_empty() {
        return Err(ApiError::BadRequest("url must not be empty".into()));
    }
    let known = state.engine.read().contains(&url);
    if known {
        return Err(ApiError::Conflict(format!("already indexed: {url}")));
    }

    let fetcher = state.fetcher.clone();
    let fetch_url = url.clone();
    let text = tokio::task::spawn_blocking(move || fetcher.fetch(&fetch_url))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    // a concurrent add of the same url may have won the race; add_text rejects it
    let ngrams = state.engine.write().add_text(&url, &text)?;
    tracing::info!(%url, ngrams, "indexed article");
    Ok((StatusCode::CREATED, Json(AddResponse { url, ngrams })))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let engine = state.engine.read();
    Json(StatsResponse {
        documents: engine.len(),
        ngrams: engine.index().num_ngrams(),
        postings: engine.index().num_postings(),
    })
}
