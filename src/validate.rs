//! Structural checks over a parsed search index.
//!
//! Null fields and unknown categories never get this far; serde rejects them
//! at parse time. What remains are defects a generator can still produce in
//! well-formed JSON: colliding anchors and blank display fields.

use crate::index::SearchIndex;
use ahash::{AHashMap, AHashSet};

/// A defect found in an otherwise well-formed index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// An anchored location occurring more than once. Anchors identify one
    /// section apiece; only unanchored page-body records may repeat.
    #[error("anchored location '{location}' appears {count} times")]
    DuplicateAnchor { location: String, count: usize },
    /// A record whose `title` is empty.
    #[error("record {index} (location '{location}') has an empty title")]
    EmptyTitle { index: usize, location: String },
    /// A record whose `page` is empty.
    #[error("record {index} (location '{location}') has an empty page name")]
    EmptyPage { index: usize, location: String },
}

/// Checks every record, returning issues in record order. Duplicate anchors
/// are reported once, at their first occurrence. A clean index yields an
/// empty list.
pub fn validate(index: &SearchIndex) -> Vec<ValidationIssue> {
    let mut anchor_counts: AHashMap<&str, usize> = AHashMap::new();
    for record in index.records() {
        if record.is_anchored() {
            *anchor_counts.entry(record.location.as_str()).or_default() += 1;
        }
    }

    let mut issues = Vec::new();
    let mut reported_anchors: AHashSet<&str> = AHashSet::new();
    for (position, record) in index.records().iter().enumerate() {
        if record.is_anchored()
            && let Some(&count) = anchor_counts.get(record.location.as_str())
            && count > 1
            && reported_anchors.insert(record.location.as_str())
        {
            issues.push(ValidationIssue::DuplicateAnchor {
                location: record.location.clone(),
                count,
            });
        }
        if record.title.is_empty() {
            issues.push(ValidationIssue::EmptyTitle {
                index: position,
                location: record.location.clone(),
            });
        }
        if record.page.is_empty() {
            issues.push(ValidationIssue::EmptyPage {
                index: position,
                location: record.location.clone(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    fn index(json: &str) -> SearchIndex {
        SearchIndex::from_json_str(json).unwrap()
    }

    #[test]
    fn test_clean_index_has_no_issues() {
        let index = index(
            r##"{"docs": [
                {"location":"","page":"Home","title":"Home","text":"body","category":"page"},
                {"location":"#API","page":"Home","title":"API","text":"","category":"section"}
            ]}"##,
        );
        check!(validate(&index).is_empty());
    }

    #[test]
    fn test_repeated_page_body_location_is_allowed() {
        let index = index(
            r#"{"docs": [
                {"location":"tutorial/","page":"Tutorial","title":"Tutorial","text":"a","category":"page"},
                {"location":"tutorial/","page":"Tutorial","title":"Setup","text":"b","category":"page"}
            ]}"#,
        );
        check!(validate(&index).is_empty());
    }

    #[test]
    fn test_duplicate_anchor_reported_once_with_count() {
        let index = index(
            r##"{"docs": [
                {"location":"#API","page":"Home","title":"API","text":"","category":"section"},
                {"location":"#API","page":"Home","title":"API again","text":"","category":"section"},
                {"location":"#API","page":"Home","title":"API thrice","text":"","category":"section"}
            ]}"##,
        );
        let issues = validate(&index);
        check!(issues.len() == 1);
        let_assert!(ValidationIssue::DuplicateAnchor { location, count } = &issues[0]);
        check!(location == "#API");
        check!(*count == 3);
    }

    #[test]
    fn test_empty_fields_reported_per_record() {
        let index = index(
            r#"{"docs": [
                {"location":"","page":"Home","title":"","text":"","category":"page"},
                {"location":"api/","page":"","title":"API","text":"","category":"page"}
            ]}"#,
        );
        let issues = validate(&index);
        check!(
            issues
                == vec![
                    ValidationIssue::EmptyTitle {
                        index: 0,
                        location: String::new(),
                    },
                    ValidationIssue::EmptyPage {
                        index: 1,
                        location: "api/".to_string(),
                    },
                ]
        );
    }

    #[test]
    fn test_issue_display_names_the_location() {
        let issue = ValidationIssue::DuplicateAnchor {
            location: "#API".to_string(),
            count: 2,
        };
        check!(issue.to_string() == "anchored location '#API' appears 2 times");
    }
}
