use crate::tokenizer::generate_ngrams;
use std::collections::{HashMap, HashSet};

/// Opaque, caller-supplied document identifier (usually the article URL).
pub type DocId = String;

/// Maps each n-gram to the documents containing it, in insertion order.
///
/// Entries only ever grow; nothing is removed or rewritten once inserted.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
    num_postings: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index `text` under `id` and return the number of distinct n-grams recorded.
    ///
    /// A document is listed at most once per n-gram for a given call, however
    /// often the n-gram recurs in its text. Calling this twice with the same id
    /// appends a second posting; see [`crate::engine::SearchEngine`] for the
    /// duplicate guard.
    pub fn insert(&mut self, id: &str, text: &str) -> usize {
        let mut seen: HashSet<String> = HashSet::new();
        for ngram in generate_ngrams(text) {
            if seen.contains(&ngram) { continue; }
            self.postings.entry(ngram.clone()).or_default().push(id.to_string());
            seen.insert(ngram);
        }
        self.num_postings += seen.len();
        seen.len()
    }

    /// Posting list for `ngram`, empty when the n-gram was never indexed.
    pub fn lookup(&self, ngram: &str) -> &[DocId] {
        self.postings.get(ngram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct n-grams in the index.
    pub fn num_ngrams(&self) -> usize { self.postings.len() }

    /// Total number of (n-gram, document) postings.
    pub fn num_postings(&self) -> usize { self.num_postings }
}
