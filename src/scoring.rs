//! Keyword relevance scoring.
//!
//! The weights are fixed heuristics and must not drift: callers compare
//! scores across releases.

use regex::Regex;

use crate::metadata::extract_title;

const TITLE_WEIGHT: f64 = 100.0;
const PHRASE_WEIGHT: f64 = 10.0;
const WORD_WEIGHT: f64 = 2.0;

/// Query words this short or shorter are not scored on their own.
const MIN_WORD_CHARS: usize = 2;

const LONG_DOCUMENT_CHARS: usize = 10_000;
const SHORT_DOCUMENT_CHARS: usize = 1_000;
const LONG_DOCUMENT_FACTOR: f64 = 0.8;
const SHORT_DOCUMENT_FACTOR: f64 = 1.2;

/// Score how relevant `text` is to `query`. Zero means "not relevant".
///
/// Matching is case-insensitive. Points come from the query appearing in
/// the title, from each occurrence of the whole query, and from each
/// whole-word occurrence of the query's longer words. The total is then
/// scaled down for very long documents and up for very short ones.
pub fn score(text: &str, query: &str) -> f64 {
    if query.is_empty() {
        return 0.0;
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();
    let mut score = 0.0;

    if extract_title(text).to_lowercase().contains(&query_lower) {
        score += TITLE_WEIGHT;
    }

    score += PHRASE_WEIGHT * text_lower.matches(&query_lower).count() as f64;

    for word in query_lower.split_whitespace() {
        if word.chars().count() > MIN_WORD_CHARS {
            score += WORD_WEIGHT * count_whole_word(&text_lower, word) as f64;
        }
    }

    score * length_factor(text.chars().count())
}

fn count_whole_word(haystack: &str, word: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(word));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(haystack).count(),
        Err(e) => {
            tracing::debug!(word, error = %e, "unusable query word");
            0
        }
    }
}

fn length_factor(chars: usize) -> f64 {
    if chars > LONG_DOCUMENT_CHARS {
        LONG_DOCUMENT_FACTOR
    } else if chars < SHORT_DOCUMENT_CHARS {
        SHORT_DOCUMENT_FACTOR
    } else {
        1.0
    }
}
