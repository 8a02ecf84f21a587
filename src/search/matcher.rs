//! Linear-scan matching over a version's records.
//!
//! Every search walks the `docs` array directly. The payloads a site ships
//! are small (tens to low hundreds of records), so no derived index is built
//! or persisted; the flat file stays the only artifact.

use crate::index::SearchIndex;
use crate::record::{Category, Record};
use crate::search::scoring::score_record;
use crate::search::tokenize::tokenize_and_stem;
use ahash::AHashSet;
use rust_stemmers::{Algorithm, Stemmer};

/// Default number of hits returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Knobs for one search pass.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Only match records of this category.
    pub category: Option<Category>,
    /// Maximum number of hits returned.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One matching record with its relevance score.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub record: &'a Record,
    pub relevance: u32,
}

impl SearchHit<'_> {
    /// The matching record's location, the value a consumer navigates to.
    pub fn location(&self) -> &str {
        &self.record.location
    }
}

/// Matches `query` against every record's `title` and `text`.
///
/// The query is tokenized and stemmed exactly like record text, so
/// "SimplexProjection", "simplex_projection", and "simplex projection" all
/// reach the same tokens. Queries with no searchable tokens (empty, all stop
/// words, all non-alphabetic) return nothing.
///
/// Hits come back sorted by relevance descending; ties keep record order, so
/// equal-scoring hits read in source-document order. At most `options.limit`
/// hits are returned.
pub fn search<'a>(index: &'a SearchIndex, query: &str, options: &SearchOptions) -> Vec<SearchHit<'a>> {
    let stemmer = Stemmer::create(Algorithm::English);
    let query_tokens: AHashSet<String> = tokenize_and_stem(query, &stemmer).into_iter().collect();
    if query_tokens.is_empty() {
        return vec![];
    }
    let query_lower = query.trim().to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    for record in index.records() {
        if let Some(filter) = options.category
            && record.category != filter
        {
            continue;
        }

        let title_tokens: AHashSet<String> =
            tokenize_and_stem(&record.title, &stemmer).into_iter().collect();
        let text_tokens: AHashSet<String> =
            tokenize_and_stem(&record.text, &stemmer).into_iter().collect();
        let relevance =
            score_record(record, &query_lower, &query_tokens, &title_tokens, &text_tokens);
        if relevance > 0 {
            hits.push(SearchHit { record, relevance });
        }
    }

    // Stable sort keeps record (traversal) order within equal scores.
    hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    hits.truncate(options.limit);
    hits
}
