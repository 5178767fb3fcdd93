//! Character n-gram inverted index with ranked top-K article search.

pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod index;
pub mod scorer;
pub mod tokenizer;
pub mod topk;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::{ConfigError, FetchError, IndexError, QueryError};
pub use fetch::Fetcher;
pub use index::{DocId, InvertedIndex};
pub use scorer::ScoredDoc;
