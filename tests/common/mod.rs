//! Shared fixtures for integration tests.
//!
//! Tests run against two kinds of sites:
//! - `fixture_site`: a temp copy of the real generated indexes under
//!   `tests/fixtures/` (a `dev` build and a `v0.4.1` release of the same
//!   package, 12 and 30 records)
//! - [`TempSite`]: hand-built version layouts for shape-specific cases
//!
//! Both live in temp directories, so tests run in parallel without
//! interference and leave nothing behind.

use documenter_search::site::{INDEX_FILE, SiteDocs};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the directory holding the checked-in index fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Reads a checked-in fixture index by version name.
#[allow(dead_code)] // Helpers used across different integration test crates
pub fn fixture(version: &str) -> String {
    let path = fixtures_root().join(version).join(INDEX_FILE);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

/// A temporary documentation site with one directory per version.
#[allow(dead_code)] // Used across different integration test crates
pub struct TempSite {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempSite {
    /// Creates a new empty temporary site.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the site root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a version directory holding the given index payload.
    pub fn add_version(&self, version: &str, payload: &str) {
        let dir = self.root.join(version);
        std::fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Failed to create version directory '{}': {}", version, e));
        std::fs::write(dir.join(INDEX_FILE), payload)
            .unwrap_or_else(|e| panic!("Failed to write index for '{}': {}", version, e));
    }

    /// Copies a checked-in fixture index into a same-named version directory.
    pub fn add_fixture(&self, version: &str) {
        self.add_version(version, &fixture(version));
    }

    /// Discovers the site built so far.
    pub fn discover(&self) -> SiteDocs {
        SiteDocs::discover(self.path()).expect("Failed to discover site")
    }
}

impl Default for TempSite {
    fn default() -> Self {
        Self::new()
    }
}

/// A discovered site carrying both real fixtures.
///
/// Holds the temp directory alive for the duration of the test; use `.docs`
/// for the handlers.
#[allow(dead_code)] // Used across different integration test crates
pub struct FixtureSite {
    _site: TempSite,
    pub docs: SiteDocs,
}

/// Creates a site with the `v0.4.1` release and the `dev` build.
///
/// `v0.4.1` is the newest release, so it is the default version.
#[allow(dead_code)] // Used across different integration test crates
#[fixture]
pub fn fixture_site() -> FixtureSite {
    let site = TempSite::new();
    site.add_fixture("dev");
    site.add_fixture("v0.4.1");
    let docs = site.discover();
    FixtureSite { _site: site, docs }
}
