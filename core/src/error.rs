use crate::DocId;
use thiserror::Error;

/// Failure reported by a [`crate::fetch::Fetcher`] while retrieving document text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("url not allowed by fetcher filter: {0}")]
    Filtered(String),
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected http status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("no article text found at {0}")]
    NoContent(String),
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("already indexed: {0}")]
    AlreadyIndexed(DocId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("expected at least {min} search characters, found {found}")]
    TooShort { min: usize, found: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("min_percent_match must be within [0, 100), got {0}")]
    MinPercentOutOfRange(f32),
    #[error("max_results must be at least 1")]
    ZeroMaxResults,
    #[error("could not read config {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("invalid config {path}: {reason}")]
    Parse { path: String, reason: String },
}
