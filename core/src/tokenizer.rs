use crate::config::NGRAM_SIZE;
use crate::error::QueryError;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^A-Za-z0-9]+").expect("valid regex");
}

/// Drop every character that is not an ASCII letter or digit and lowercase the rest.
///
/// Non-ASCII characters are removed outright rather than folded, so `"café"` becomes `"caf"`.
pub fn normalize(text: &str) -> String {
    match NON_ALNUM.replace_all(text, "") {
        Cow::Borrowed(s) => s.to_ascii_lowercase(),
        Cow::Owned(mut s) => {
            s.make_ascii_lowercase();
            s
        }
    }
}

/// Slide a [`NGRAM_SIZE`] window over the normalized text, left to right.
///
/// Repeated windows are emitted every time they occur; callers that need a set
/// deduplicate on their side. Text that normalizes to fewer than `NGRAM_SIZE`
/// characters yields no n-grams.
pub fn generate_ngrams(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.len() < NGRAM_SIZE {
        return Vec::new();
    }
    // normalized text is pure ASCII, byte offsets are char offsets
    (0..=normalized.len() - NGRAM_SIZE)
        .map(|i| normalized[i..i + NGRAM_SIZE].to_string())
        .collect()
}

/// Reject queries that cannot produce a single n-gram.
pub fn validate_query(query: &str) -> Result<(), QueryError> {
    let found = normalize(query).len();
    if found < NGRAM_SIZE {
        return Err(QueryError::TooShort { min: NGRAM_SIZE, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello, World! 42"), "helloworld42");
        assert_eq!(normalize(";;;;"), "");
        assert_eq!(normalize("Café Ünïcode"), "cafncode");
    }

    #[test]
    fn ngrams_of_short_text_are_empty() {
        assert!(generate_ngrams("abcd").is_empty());
        assert!(generate_ngrams("a-b-c-d").is_empty());
    }

    #[test]
    fn ngrams_slide_one_character_at_a_time() {
        assert_eq!(generate_ngrams("Hello World"), vec!["hello", "ellow", "llowo", "lowor", "oworl", "world"]);
    }

    #[test]
    fn ngrams_keep_repeats() {
        assert_eq!(generate_ngrams("aaaaaaa"), vec!["aaaaa", "aaaaa", "aaaaa"]);
    }

    #[test]
    fn validate_query_counts_normalized_chars() {
        assert!(validate_query("quick brown").is_ok());
        assert_eq!(validate_query(";;;;;;;;;;"), Err(QueryError::TooShort { min: 5, found: 0 }));
        assert_eq!(validate_query("a b c d"), Err(QueryError::TooShort { min: 5, found: 4 }));
    }
}
