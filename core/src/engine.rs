use crate::config::SearchConfig;
use crate::error::{ConfigError, IndexError};
use crate::fetch::Fetcher;
use crate::index::{DocId, InvertedIndex};
use crate::scorer::{score, ScoredDoc};
use crate::topk::{select_top_k, sort_by_percent};
use std::collections::HashSet;

/// An owned n-gram index plus the bookkeeping needed to add and search articles.
///
/// There is no internal locking: wrap the engine in a lock if more than one
/// caller needs it at a time.
#[derive(Debug, Default)]
pub struct SearchEngine {
    index: InvertedIndex,
    config: SearchConfig,
    indexed: HashSet<DocId>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    /// Fetch `id` through `fetcher` and index the returned text.
    ///
    /// Ids that are already indexed are rejected before any fetch happens.
    /// Fetch failures are returned unchanged and leave the index untouched.
    pub fn add_document<F: Fetcher + ?Sized>(&mut self, id: &str, fetcher: &F) -> Result<usize, IndexError> {
        if self.contains(id) {
            return Err(IndexError::AlreadyIndexed(id.to_string()));
        }
        let text = fetcher.fetch(id)?;
        self.add_text(id, &text)
    }

    /// Index text that has already been retrieved. Returns the number of distinct n-grams.
    pub fn add_text(&mut self, id: &str, text: &str) -> Result<usize, IndexError> {
        if !self.indexed.insert(id.to_string()) {
            return Err(IndexError::AlreadyIndexed(id.to_string()));
        }
        let ngrams = self.index.insert(id, text);
        tracing::debug!(id, ngrams, documents = self.indexed.len(), "indexed document");
        Ok(ngrams)
    }

    /// Ranked documents for `query`: at most `max_results`, each strictly above
    /// `min_percent_match`, ordered by descending percentage.
    pub fn search(&self, query: &str) -> Vec<ScoredDoc> {
        self.search_top(query, self.config.max_results)
    }

    /// Like [`Self::search`] with a caller-chosen limit, capped at `max_results`.
    pub fn search_top(&self, query: &str, k: usize) -> Vec<ScoredDoc> {
        let scored = score(query, &self.index, self.config.min_percent_match);
        let mut results = select_top_k(scored, k.min(self.config.max_results));
        // heap order is not rank order
        sort_by_percent(&mut results);
        results
    }

    pub fn contains(&self, id: &str) -> bool { self.indexed.contains(id) }

    /// Number of indexed documents.
    pub fn len(&self) -> usize { self.indexed.len() }

    pub fn is_empty(&self) -> bool { self.indexed.is_empty() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn config(&self) -> &SearchConfig { &self.config }
}
