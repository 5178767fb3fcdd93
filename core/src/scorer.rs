//! Match-count scoring of indexed documents against a query.

use crate::index::{DocId, InvertedIndex};
use crate::tokenizer::generate_ngrams;
use serde::Serialize;
use std::collections::HashMap;

/// A document together with the share of the query's n-grams it contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub id: DocId,
    /// `100 * matched / total`, where `total` counts repeated query n-grams.
    pub percent_match: f32,
}

/// Score every document sharing at least one n-gram with `query` and keep
/// those whose percentage strictly exceeds `min_percent`.
///
/// Results come back in the order documents were first tallied; ranked search
/// keeps that order among equal scores. A query with no n-grams scores nothing.
pub fn score(query: &str, index: &InvertedIndex, min_percent: f32) -> Vec<ScoredDoc> {
    let ngrams = generate_ngrams(query);
    let total = ngrams.len();
    if total == 0 {
        return Vec::new();
    }

    // doc -> slot in `tally`
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, u32)> = Vec::new();
    for ngram in &ngrams {
        for id in index.lookup(ngram) {
            match slots.get(id.as_str()) {
                Some(&slot) => tally[slot].1 += 1,
                None => {
                    slots.insert(id.as_str(), tally.len());
                    tally.push((id.as_str(), 1));
                }
            }
        }
    }

    let candidates = tally.len();
    let scored: Vec<ScoredDoc> = tally
        .into_iter()
        .map(|(id, matched)| ScoredDoc { id: id.to_string(), percent_match: matched as f32 * 100.0 / total as f32 })
        .filter(|doc| doc.percent_match > min_percent)
        .collect();
    tracing::debug!(query_ngrams = total, candidates, kept = scored.len(), "scored query");
    scored
}
