//! Cross-version drift between two search indexes.
//!
//! Version snapshots of a site are near-duplicates that drift as pages and
//! docstrings come and go. Anchored records carry a stable identity (their
//! location), so they can be compared across versions; unanchored page-body
//! records repeat their page's location and are only visible here through the
//! page-level comparison.

use crate::index::SearchIndex;
use crate::record::Record;
use ahash::{AHashMap, AHashSet};

/// A record field whose value differs between two versions of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedField {
    Title,
    Text,
    Category,
}

impl ChangedField {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangedField::Title => "title",
            ChangedField::Text => "text",
            ChangedField::Category => "category",
        }
    }
}

/// An anchor present in both versions with differing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedAnchor {
    pub location: String,
    pub fields: Vec<ChangedField>,
}

/// Drift from an older to a newer index.
///
/// Anchored locations appear in the order of the version that still carries
/// them (`added`/`changed` follow the new index, `removed` the old one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Anchored locations only the new version has.
    pub added: Vec<String>,
    /// Anchored locations only the old version has.
    pub removed: Vec<String>,
    /// Anchors in both versions whose title, text, or category differ.
    pub changed: Vec<ChangedAnchor>,
    /// Page paths only the new version has.
    pub pages_added: Vec<String>,
    /// Page paths only the old version has.
    pub pages_removed: Vec<String>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.pages_added.is_empty()
            && self.pages_removed.is_empty()
    }
}

/// Compares two versions of an index.
pub fn diff(old: &SearchIndex, new: &SearchIndex) -> DiffReport {
    let old_anchors = anchored_by_location(old);
    let new_anchors = anchored_by_location(new);

    let mut report = DiffReport::default();

    let mut seen: AHashSet<&str> = AHashSet::new();
    for record in new.records() {
        if !record.is_anchored() || !seen.insert(record.location.as_str()) {
            continue;
        }
        match old_anchors.get(record.location.as_str()) {
            None => report.added.push(record.location.clone()),
            Some(old_record) => {
                let fields = changed_fields(old_record, record);
                if !fields.is_empty() {
                    report.changed.push(ChangedAnchor {
                        location: record.location.clone(),
                        fields,
                    });
                }
            }
        }
    }

    seen.clear();
    for record in old.records() {
        if record.is_anchored()
            && seen.insert(record.location.as_str())
            && !new_anchors.contains_key(record.location.as_str())
        {
            report.removed.push(record.location.clone());
        }
    }

    let old_pages: Vec<String> = old.pages().into_iter().map(|group| group.path).collect();
    let new_pages: Vec<String> = new.pages().into_iter().map(|group| group.path).collect();
    let old_page_set: AHashSet<&str> = old_pages.iter().map(String::as_str).collect();
    let new_page_set: AHashSet<&str> = new_pages.iter().map(String::as_str).collect();
    report.pages_added = new_pages
        .iter()
        .filter(|path| !old_page_set.contains(path.as_str()))
        .cloned()
        .collect();
    report.pages_removed = old_pages
        .iter()
        .filter(|path| !new_page_set.contains(path.as_str()))
        .cloned()
        .collect();

    report
}

/// First record per anchored location. Duplicate anchors are a validation
/// issue; the first occurrence stands in for them here.
fn anchored_by_location(index: &SearchIndex) -> AHashMap<&str, &Record> {
    let mut anchors: AHashMap<&str, &Record> = AHashMap::new();
    for record in index.records() {
        if record.is_anchored() {
            anchors.entry(record.location.as_str()).or_insert(record);
        }
    }
    anchors
}

fn changed_fields(old: &Record, new: &Record) -> Vec<ChangedField> {
    let mut fields = Vec::new();
    if old.title != new.title {
        fields.push(ChangedField::Title);
    }
    if old.text != new.text {
        fields.push(ChangedField::Text);
    }
    if old.category != new.category {
        fields.push(ChangedField::Category);
    }
    fields
}
