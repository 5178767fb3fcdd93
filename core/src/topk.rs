//! Bounded top-K selection over scored documents.
//!
//! Selection and ordering are two separate steps. [`select_top_k`] keeps the
//! `k` best entries in a binary heap and hands them back in their input order,
//! not ranked. Anything shown to a user must go through [`sort_by_percent`]
//! afterwards; [`crate::engine::SearchEngine::search`] always does both, so
//! equal scores keep the order the scorer produced them in.

use crate::scorer::ScoredDoc;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry {
    percent: OrderedFloat<f32>,
    seq: usize,
    doc: ScoredDoc,
}

// Higher percent is "greater"; among equal percents the earlier entry wins.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.percent.cmp(&other.percent).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Entry {}

/// Return at most `k` entries, none scoring below any entry left out.
///
/// Runs in `O(n log k)` with a min-heap capped at `k` elements. The kept
/// entries come back in input order; call [`sort_by_percent`] before
/// presenting them.
pub fn select_top_k(scored: Vec<ScoredDoc>, k: usize) -> Vec<ScoredDoc> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::with_capacity(k + 1);
    for (seq, doc) in scored.into_iter().enumerate() {
        heap.push(Reverse(Entry { percent: OrderedFloat(doc.percent_match), seq, doc }));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut kept = heap.into_vec();
    kept.sort_unstable_by_key(|Reverse(entry)| entry.seq);
    kept.into_iter().map(|Reverse(entry)| entry.doc).collect()
}

/// Stable sort by descending `percent_match`.
pub fn sort_by_percent(results: &mut [ScoredDoc]) {
    results.sort_by(|a, b| OrderedFloat(b.percent_match).cmp(&OrderedFloat(a.percent_match)));
}
