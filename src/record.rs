//! The Documenter search-index record model.
//!
//! A generated `search_index.js` holds a flat list of records, one per page,
//! section heading, or docstring. Every field is a required string; `text`
//! is the only one that may legitimately be empty (section headings carry
//! their content in `title`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag for a record's role in the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Free-text body content of a page.
    Page,
    /// A section heading with an in-page anchor.
    Section,
    /// A module docstring.
    Module,
    /// A type docstring.
    Type,
    /// A method docstring.
    Method,
}

impl Category {
    /// All categories a generator can emit, in display order.
    pub const ALL: [Category; 5] = [
        Category::Page,
        Category::Section,
        Category::Module,
        Category::Type,
        Category::Method,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Module => "module",
            Category::Type => "type",
            Category::Method => "method",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category filter names an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: page, section, module, type, method)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "page" => Ok(Category::Page),
            "section" => Ok(Category::Section),
            "module" => Ok(Category::Module),
            "type" => Ok(Category::Type),
            "method" => Ok(Category::Method),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// One documentation entry in the `docs` array.
///
/// Field order matches the generated artifact so re-serialization stays
/// byte-comparable apart from whitespace. Unknown keys are rejected: a
/// silently dropped field would break the parse→serialize round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Relative URL fragment identifying a page and optional in-page anchor,
    /// e.g. `tutorial/#Tutorial` or `""` for the site root.
    pub location: String,
    /// Human-readable page name.
    pub page: String,
    /// Human-readable section or symbol title.
    pub title: String,
    /// Free-text documentation content; empty for bare headings.
    pub text: String,
    /// Role of this record in the site.
    pub category: Category,
}

impl Record {
    /// The page part of the location, without any `#` fragment.
    ///
    /// The empty string is the site root page.
    pub fn page_path(&self) -> &str {
        match self.location.split_once('#') {
            Some((page, _)) => page,
            None => &self.location,
        }
    }

    /// The in-page anchor, if the location carries one.
    pub fn anchor(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor)
    }

    /// Whether this record points at an in-page anchor rather than a page body.
    pub fn is_anchored(&self) -> bool {
        self.location.contains('#')
    }
}
