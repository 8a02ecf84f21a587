//! Search-index payload parsing and serialization.
//!
//! A documentation version publishes its index as `search_index.js`, a single
//! JSON object assigned to a top-level variable:
//!
//! ```text
//! var documenterSearchIndex = {"docs": [...]}
//! ```
//!
//! `SearchIndex` accepts both the published script form and the bare JSON
//! object, and re-serializes either. The record list is carried verbatim in
//! file order so a parse→serialize round-trip loses nothing but whitespace.

use crate::error::Result;
use crate::record::Record;
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The variable name the generated script assigns the payload to.
pub const VARIABLE_NAME: &str = "documenterSearchIndex";

/// A parsed `search_index.js` payload: the flat list of documentation records
/// for one version of a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchIndex {
    docs: Vec<Record>,
}

/// One page of the site with its record count, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGroup {
    /// Page path without any anchor; empty string is the site root.
    pub path: String,
    /// Human-readable page name, taken from the first record on the page.
    pub page: String,
    /// Number of records located on this page.
    pub records: usize,
}

impl SearchIndex {
    pub fn new(docs: Vec<Record>) -> Self {
        SearchIndex { docs }
    }

    /// Parses the bare JSON object form, `{"docs": [...]}`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse search index JSON")
    }

    /// Parses the published script form, `var documenterSearchIndex = {...}`
    /// with an optional trailing semicolon.
    pub fn from_script_str(input: &str) -> Result<Self> {
        let Some(body) = strip_assignment(input) else {
            bail!("expected a `var {VARIABLE_NAME} = ...` assignment");
        };
        let body = body.trim_end();
        let body = body.strip_suffix(';').unwrap_or(body);
        Self::from_json_str(body)
    }

    /// Parses either form, sniffed from the first non-whitespace character.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim_start().starts_with('{') {
            Self::from_json_str(input)
        } else {
            Self::from_script_str(input)
        }
    }

    /// Reads a `search_index.js` (or bare JSON) file and parses it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search index at {}", path.display()))?;
        Self::parse(&content)
    }

    /// The `docs` array, in file (traversal) order.
    pub fn records(&self) -> &[Record] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// The first record at an exact location, if any.
    pub fn find_location(&self, location: &str) -> Option<&Record> {
        self.docs.iter().find(|record| record.location == location)
    }

    /// Pages in first-seen order, each with its record count.
    ///
    /// Grouping is by page path; the human-readable name comes from the first
    /// record encountered on that page.
    pub fn pages(&self) -> Vec<PageGroup> {
        let mut groups: Vec<PageGroup> = Vec::new();
        for record in &self.docs {
            let path = record.page_path();
            if let Some(group) = groups.iter_mut().find(|group| group.path == path) {
                group.records += 1;
            } else {
                groups.push(PageGroup {
                    path: path.to_string(),
                    page: record.page.clone(),
                    records: 1,
                });
            }
        }
        groups
    }

    /// Serializes back to the bare JSON object form.
    pub fn to_json_string(&self) -> String {
        // Vec<Record> with string/enum fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serializes back to the published script form.
    pub fn to_script_string(&self) -> String {
        format!("var {VARIABLE_NAME} = {}\n", self.to_json_string())
    }
}

/// Strips the `var documenterSearchIndex =` prefix, returning the assigned
/// value text. `None` when the input is not that assignment.
fn strip_assignment(input: &str) -> Option<&str> {
    let rest = input.trim_start().strip_prefix("var")?;
    // `var` must be a standalone keyword, not an identifier prefix.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix(VARIABLE_NAME)?;
    let rest = rest.trim_start().strip_prefix('=')?;
    Some(rest)
}
