//! Documentation-site version discovery and index loading.
//!
//! A generated site keeps one directory per published version (`v0.4.1/`,
//! `dev/`, ...), each carrying its own `search_index.js`. `SiteDocs` discovers
//! those directories and provides lazy, cached loading of their indexes. A
//! version whose index is missing or malformed is reported per version and
//! never takes down the others.

use crate::error::{LoadError, Result};
use crate::index::SearchIndex;
use anyhow::Context;
use lru::LruCache;
use rapidfuzz::distance::jaro_winkler;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// File name every version directory publishes.
pub const INDEX_FILE: &str = "search_index.js";

/// Maximum number of parsed indexes kept in memory. Sites rarely publish more
/// versions than this; older entries fall out least-recently-used.
const LRU_CACHE_SIZE: usize = 16;

/// Minimum jaro-winkler similarity for a version-name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Manages access to a site's per-version search indexes.
pub struct SiteDocs {
    /// Site root containing one directory per version.
    root: PathBuf,
    /// Discovered version names, releases newest first, then the rest.
    versions: Vec<String>,
    /// Lazily loaded indexes.
    cache: RwLock<LruCache<String, Arc<SearchIndex>>>,
}

impl std::fmt::Debug for SiteDocs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteDocs")
            .field("root", &self.root)
            .field("versions", &self.versions)
            .finish()
    }
}

impl SiteDocs {
    /// Scans `root` one level deep for version directories holding an index.
    ///
    /// Errors if the root is not a directory or no version directory is found;
    /// everything past discovery degrades per version instead.
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let entries = std::fs::read_dir(root)
            .with_context(|| format!("Failed to read site root {}", root.display()))?;

        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read site root {}", root.display()))?;
            let path = entry.path();
            if path.is_dir()
                && path.join(INDEX_FILE).is_file()
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
            {
                versions.push(name.to_string());
            }
        }

        if versions.is_empty() {
            anyhow::bail!(
                "No version directories with {INDEX_FILE} under {}",
                root.display()
            );
        }
        sort_versions(&mut versions);

        tracing::info!(
            "Discovered {} documentation versions at {}",
            versions.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            versions,
            cache: RwLock::new(LruCache::new(
                NonZeroUsize::new(LRU_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN),
            )),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discovered version names, releases newest first, non-releases after.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// The version served when none is requested: the newest release, or the
    /// first discovered name when the site has no release directories.
    pub fn default_version(&self) -> &str {
        self.versions.first().map_or("", String::as_str)
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.versions.iter().any(|known| known == version)
    }

    /// Path to a version's `search_index.js`.
    pub fn index_path(&self, version: &str) -> PathBuf {
        self.root.join(version).join(INDEX_FILE)
    }

    /// Loads a version's index (lazy, cached).
    ///
    /// Returns a cached `Arc<SearchIndex>` if already parsed, otherwise reads
    /// and parses the file off the async runtime.
    pub async fn load(&self, version: &str) -> std::result::Result<Arc<SearchIndex>, LoadError> {
        {
            let mut cache = self.cache.write().await;
            if let Some(index) = cache.get(version) {
                tracing::debug!("Cache hit for version {version}");
                return Ok(index.clone());
            }
        }

        let path = self.index_path(version);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    version: version.to_string(),
                    path,
                });
            }
            Err(error) => {
                return Err(LoadError::Malformed {
                    version: version.to_string(),
                    error: error.to_string(),
                });
            }
        };

        // Parsing is CPU-bound; keep it off the runtime threads.
        let parsed = tokio::task::spawn_blocking(move || SearchIndex::parse(&content))
            .await
            .map_err(|error| LoadError::Malformed {
                version: version.to_string(),
                error: format!("parse task failed: {error}"),
            })?;
        let index = match parsed {
            Ok(index) => Arc::new(index),
            Err(error) => {
                return Err(LoadError::Malformed {
                    version: version.to_string(),
                    error: format!("{error:#}"),
                });
            }
        };

        {
            let mut cache = self.cache.write().await;
            cache.put(version.to_string(), index.clone());
        }
        tracing::debug!("Loaded {} records for version {version}", index.len());

        Ok(index)
    }

    /// Loads every discovered version concurrently.
    ///
    /// Per-version failures come back as values; one malformed index never
    /// fails the others.
    pub async fn load_all(
        &self,
    ) -> Vec<(String, std::result::Result<Arc<SearchIndex>, LoadError>)> {
        let loads = self.versions.iter().map(|version| async {
            let result = self.load(version).await;
            (version.clone(), result)
        });
        futures::future::join_all(loads).await
    }

    /// Checks whether a version's index is already parsed and cached.
    pub async fn is_cached(&self, version: &str) -> bool {
        self.cache.read().await.contains(version)
    }

    /// Known version names similar to `name`, best match first.
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .versions
            .iter()
            .map(|version| {
                (
                    jaro_winkler::similarity(name.chars(), version.chars()),
                    version,
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(3)
            .map(|(_, version)| version.clone())
            .collect()
    }
}

/// Parses a `vX.Y.Z`-style release name. Missing minor/patch default to zero;
/// anything non-numeric is not a release.
fn parse_release(name: &str) -> Option<(u64, u64, u64)> {
    let rest = name.strip_prefix('v').unwrap_or(name);
    let mut parts = rest.splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().map_or(Ok(0), str::parse).ok()?;
    let patch = parts.next().map_or(Ok(0), str::parse).ok()?;
    Some((major, minor, patch))
}

/// Releases newest first, then non-releases (`dev`, `stable`) alphabetically,
/// the way a site's version selector lists them.
fn sort_versions(versions: &mut [String]) {
    versions.sort_by(|a, b| match (parse_release(a), parse_release(b)) {
        (Some(release_a), Some(release_b)) => {
            release_b.cmp(&release_a).then_with(|| a.cmp(b))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
