//! Substring and token matching over search-index records.
//!
//! This module provides the matching half of the consuming tool: tokenization,
//! relevance scoring, and a linear scan over a version's `docs` array.

// Module declarations
pub(crate) mod matcher;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use matcher::{DEFAULT_LIMIT, SearchHit, SearchOptions, search};
pub use scoring::substring_relevance;
