//! Tooling for the `search_index.js` payloads a generated documentation site
//! publishes per version: parse them, search them, validate them, and compare
//! them across versions.

pub mod cli;
pub mod commands;
pub mod diff;
pub mod error;
pub mod index;
pub mod record;
pub mod search;
pub mod site;
pub mod validate;

pub use index::SearchIndex;
pub use record::{Category, Record};
pub use search::{SearchHit, SearchOptions, search};
