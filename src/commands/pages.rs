//! Pages handler: per-page record counts for one version.

use crate::commands::resolve_version;
use crate::site::SiteDocs;

#[derive(Debug, Clone)]
pub struct PagesRequest {
    /// Version to list; the site default when absent.
    pub version: Option<String>,
}

/// Lists a version's pages in traversal order with their record counts.
pub async fn handle_pages(site: &SiteDocs, request: PagesRequest) -> Result<String, String> {
    let version = resolve_version(site, request.version.as_deref())?;
    let index = site
        .load(&version)
        .await
        .map_err(|error| error.to_string())?;

    let pages = index.pages();
    let mut output = format!(
        "Pages in '{version}' ({} record(s) across {} page(s)):\n\n",
        index.len(),
        pages.len()
    );
    for group in &pages {
        let path = if group.path.is_empty() {
            "site root"
        } else {
            group.path.as_str()
        };
        output.push_str(&format!(
            "  • {}: {} record(s) at {path}\n",
            group.page, group.records
        ));
    }

    Ok(output)
}
