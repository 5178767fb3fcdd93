use ngram_core::fetch::StaticFetcher;
use ngram_core::tokenizer::{generate_ngrams, normalize};
use ngram_core::{IndexError, SearchConfig, SearchEngine};

fn engine_with(docs: &[(&str, &str)]) -> SearchEngine {
    let mut engine = SearchEngine::default();
    for (id, text) in docs {
        engine.add_text(id, text).unwrap();
    }
    engine
}

#[test]
fn normalize_is_idempotent_and_case_insensitive() {
    for s in ["The Quick Brown Fox", "ABC", "a;b;c", "  ", "Ünïcode 123!", "https://medium.com/@a/b-c"] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
    assert_eq!(normalize("ABC"), normalize("abc"));
}

#[test]
fn ngram_count_follows_normalized_length() {
    for (text, len) in [("helloworld", 10usize), ("Hello, World!", 10), ("abcde", 5), ("a b c d e f g", 7)] {
        assert_eq!(generate_ngrams(text).len(), len - 5 + 1, "{text}");
    }
    for text in ["", "abcd", ";;;;;;;;", "a.b.c.d"] {
        assert!(generate_ngrams(text).is_empty(), "{text}");
    }
}

#[test]
fn quick_brown_fox_matches_only_related_document() {
    let engine = engine_with(&[("A", "The Quick Brown Fox"), ("B", "completely unrelated content here")]);
    let results = engine.search("quick brown fox");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "A");
    assert!(results[0].percent_match > 65.0);
}

#[test]
fn hello_world_query_finds_hello_world_document() {
    let engine = engine_with(&[("hello", "hello world"), ("other", "nothing in common at all")]);
    let ids: Vec<String> = engine.search("helloworld").into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["hello".to_string()]);
}

#[test]
fn junk_query_yields_nothing() {
    let engine = engine_with(&[("A", "The Quick Brown Fox")]);
    assert!(engine.search(";;;;").is_empty());
    assert!(engine.search(";;;;;;;;;;;;").is_empty());
    assert!(engine.search("").is_empty());
}

#[test]
fn results_are_capped_sorted_and_above_threshold() {
    // doc i holds the first 22 + i characters of the query; 17 of them clear 65%
    let query = "abcdefghijklmnopqrstuvwxyz0123456789";
    let mut engine = SearchEngine::default();
    for i in 0..20 {
        let end = (22 + i).min(query.len());
        engine.add_text(&format!("doc{i:02}"), &query[..end]).unwrap();
    }
    engine.add_text("noise", "zyxwvutsrq").unwrap();

    let results = engine.search(query);
    assert_eq!(results.len(), 10);
    assert!(results.iter().all(|r| r.percent_match > 65.0));
    assert!(results.windows(2).all(|w| w[0].percent_match >= w[1].percent_match));
    assert!(results.iter().all(|r| r.id != "noise"));
    // the longest prefixes win
    assert_eq!(results[0].percent_match, 100.0);
}

#[test]
fn custom_threshold_and_limit_apply() {
    let cfg = SearchConfig { min_percent_match: 10.0, max_results: 1 };
    let mut engine = SearchEngine::new(cfg).unwrap();
    engine.add_text("half", "abcdef").unwrap();
    engine.add_text("full", "abcdefgh").unwrap();
    let results = engine.search("abcdefgh");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "full");
}

#[test]
fn re_adding_is_rejected_and_does_not_duplicate_postings() {
    let fetcher = StaticFetcher::new().with("https://medium.com/a", "aaaaa aaaaa aaaaa");
    let mut engine = SearchEngine::default();
    engine.add_document("https://medium.com/a", &fetcher).unwrap();
    let err = engine.add_document("https://medium.com/a", &fetcher).unwrap_err();
    assert!(matches!(err, IndexError::AlreadyIndexed(_)));
    assert_eq!(err.to_string(), "already indexed: https://medium.com/a");
    assert_eq!(engine.index().lookup("aaaaa").len(), 1);
    assert_eq!(engine.len(), 1);
}

#[test]
fn equal_scores_rank_in_first_match_order() {
    let mut engine = SearchEngine::default();
    engine.add_text("partial", "quick brown").unwrap();
    for id in ["third", "first", "second"] {
        engine.add_text(id, "quick brown fox").unwrap();
    }
    // "partial" holds 6 of the 9 query n-grams; the rest tie at 100%
    let ids: Vec<String> = engine.search("quick brown fox").into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["third", "first", "second", "partial"]);

    let ids: Vec<String> = engine.search_top("quick brown fox", 2).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["third", "first"]);
}
