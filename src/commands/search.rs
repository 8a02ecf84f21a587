//! Search handler: the substring/token matching surface.

use crate::commands::{display_location, resolve_version};
use crate::record::Category;
use crate::search::{SearchHit, SearchOptions, search};
use crate::site::SiteDocs;

#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Search query term.
    pub query: String,
    /// Version to search; the site default when absent.
    pub version: Option<String>,
    /// Search every discovered version instead of one.
    pub all_versions: bool,
    /// Only match records of this category.
    pub category: Option<Category>,
    /// Maximum number of results per version.
    pub limit: usize,
}

/// Execute a search against one version, or every version with per-version
/// degradation for indexes that fail to load.
pub async fn handle_search(site: &SiteDocs, request: SearchRequest) -> Result<String, String> {
    let options = SearchOptions {
        category: request.category,
        limit: request.limit,
    };

    if request.all_versions {
        let mut output = format!(
            "Search results for '{}' across {} versions:\n\n",
            request.query,
            site.versions().len()
        );
        for (version, result) in site.load_all().await {
            match result {
                Ok(index) => {
                    let hits = search(&index, &request.query, &options);
                    output.push_str(&format_version_hits(&hits, &version));
                }
                Err(error) => {
                    tracing::warn!("Skipping version while searching: {error}");
                    output.push_str(&format!("{version}: {error}\n\n"));
                }
            }
        }
        return Ok(output);
    }

    let version = resolve_version(site, request.version.as_deref())?;
    let index = site
        .load(&version)
        .await
        .map_err(|error| error.to_string())?;
    let hits = search(&index, &request.query, &options);

    if hits.is_empty() {
        return Ok(no_results_message(&request.query, &version));
    }

    let mut output = format!("Search results for '{}' in '{version}':\n\n", request.query);
    output.push_str(&format_hits(&hits));
    Ok(output)
}

/// One version's section of `--all-versions` output.
fn format_version_hits(hits: &[SearchHit<'_>], version: &str) -> String {
    if hits.is_empty() {
        return format!("{version}: no results\n\n");
    }
    let mut output = format!("{version}: {} result(s)\n", hits.len());
    output.push_str(&format_hits(hits));
    output
}

/// Format hits into a numbered list with normalized relevance percentages.
fn format_hits(hits: &[SearchHit<'_>]) -> String {
    let mut output = String::new();
    let max_score = hits.first().map_or(1, |hit| hit.relevance.max(1));

    for (idx, hit) in hits.iter().enumerate() {
        let relevance = (hit.relevance * 100 + max_score / 2) / max_score;
        output.push_str(&format!(
            "{}. `{}` ({}) - relevance: {relevance}%\n",
            idx + 1,
            hit.record.title,
            hit.record.category
        ));
        output.push_str(&format!("   at {}\n", display_location(hit.location())));
        if let Some(line) = snippet(&hit.record.text) {
            output.push_str(&format!("   {line}\n"));
        }
        output.push('\n');
    }

    output
}

/// First non-empty line of a record's text, shortened for display.
fn snippet(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    if line.chars().count() > 120 {
        let cut: String = line.chars().take(117).collect();
        Some(format!("{cut}..."))
    } else {
        Some(line.to_string())
    }
}

fn no_results_message(query: &str, version: &str) -> String {
    let mut msg = format!("No results found for '{query}' in '{version}'.\n\n");

    msg.push_str("Search tips:\n");
    msg.push_str("• Try a shorter or more general term\n");
    msg.push_str("• Search for symbol names like 'simplex_projection' or 'DiffFW'\n");
    msg.push_str("• Search uses stemming: 'projection' matches 'projections'\n");
    msg.push_str("• Words like 'the' or 'for' are ignored\n");

    msg
}
