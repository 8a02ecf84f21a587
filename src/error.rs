//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for documenter-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a version's search index fails.
///
/// Both variants are recoverable at the site level: a version whose index is
/// missing or malformed is reported as unavailable, and the remaining versions
/// stay searchable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    /// No `search_index.js` at the expected path.
    #[error("search unavailable for '{version}': no index at {path}", path = path.display())]
    NotFound { version: String, path: PathBuf },
    /// The index file exists but does not hold a well-formed payload.
    #[error("search unavailable for '{version}': {error}")]
    Malformed { version: String, error: String },
}

impl LoadError {
    /// The version directory this error belongs to.
    pub fn version(&self) -> &str {
        match self {
            Self::NotFound { version, .. } | Self::Malformed { version, .. } => version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_not_found_names_version_and_path() {
        let error = LoadError::NotFound {
            version: "v0.4.1".to_string(),
            path: PathBuf::from("/docs/v0.4.1/search_index.js"),
        };
        check!(
            error.to_string()
                == "search unavailable for 'v0.4.1': no index at /docs/v0.4.1/search_index.js"
        );
        check!(error.version() == "v0.4.1");
    }

    #[test]
    fn test_malformed_carries_parse_detail() {
        let error = LoadError::Malformed {
            version: "dev".to_string(),
            error: "expected value at line 1 column 1".to_string(),
        };
        check!(error.to_string().starts_with("search unavailable for 'dev':"));
        check!(error.to_string().contains("line 1 column 1"));
    }
}
