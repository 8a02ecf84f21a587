//! Versions handler: list discovered versions with their load status.

use crate::site::SiteDocs;

/// Lists every discovered version with its record count, or its load failure
/// when the index is missing or malformed.
pub async fn handle_versions(site: &SiteDocs) -> Result<String, String> {
    let mut output = format!("Documentation versions at {}:\n\n", site.root().display());
    let default = site.default_version().to_string();

    for (version, result) in site.load_all().await {
        let marker = if version == default { " (default)" } else { "" };
        match result {
            Ok(index) => {
                output.push_str(&format!(
                    "  • {version}{marker}: {} record(s)\n",
                    index.len()
                ));
            }
            Err(error) => {
                tracing::warn!("Version listed as unavailable: {error}");
                output.push_str(&format!("  • {version}{marker}: {error}\n"));
            }
        }
    }

    Ok(output)
}
