//! Search relevance scoring.
//!
//! Two signals feed a record's relevance: substring tiers over the lowercased
//! `title` and `text`, and query-token membership in the tokenized fields.
//! Title hits weigh double text hits.

use crate::record::Record;
use ahash::AHashSet;

/// Multiplier applied to every title signal.
pub(crate) const TITLE_WEIGHT: u32 = 2;

/// Score contributed by each query token found in a record's text tokens.
pub(crate) const TOKEN_HIT_SCORE: u32 = 10;

/// Calculate simple text relevance score.
///
/// Returns a score based on how well the query matches the text:
/// - 100: Exact match
/// - 50: Text starts with query
/// - 10: Text contains query
/// - None: No match
pub fn substring_relevance(text: &str, query: &str) -> Option<u32> {
    if text == query {
        Some(100)
    } else if text.starts_with(query) {
        Some(50)
    } else if text.contains(query) {
        Some(10)
    } else {
        None
    }
}

/// Combined relevance of one record for a prepared query. Zero means no match.
///
/// `title_tokens` and `text_tokens` are the record's stemmed tokens; `query`
/// is already trimmed and lowercased.
pub(crate) fn score_record(
    record: &Record,
    query: &str,
    query_tokens: &AHashSet<String>,
    title_tokens: &AHashSet<String>,
    text_tokens: &AHashSet<String>,
) -> u32 {
    let mut score = 0;

    if let Some(tier) = substring_relevance(&record.title.to_lowercase(), query) {
        score += tier * TITLE_WEIGHT;
    }
    if let Some(tier) = substring_relevance(&record.text.to_lowercase(), query) {
        score += tier;
    }

    for token in query_tokens {
        if title_tokens.contains(token) {
            score += TOKEN_HIT_SCORE * TITLE_WEIGHT;
        }
        if text_tokens.contains(token) {
            score += TOKEN_HIT_SCORE;
        }
    }

    score
}
