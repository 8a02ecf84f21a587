//! Check handler: structural validation of one or all version indexes.

use crate::commands::resolve_version;
use crate::index::SearchIndex;
use crate::site::SiteDocs;
use crate::validate::validate;

#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Version to check; every discovered version when absent.
    pub version: Option<String>,
}

/// Validates indexes and reports their issues in record order.
///
/// With an explicit version, a load failure is a hard error; without one,
/// each version reports its own status and a broken index never hides the
/// findings for the rest.
pub async fn handle_check(site: &SiteDocs, request: CheckRequest) -> Result<String, String> {
    if let Some(requested) = request.version.as_deref() {
        let version = resolve_version(site, Some(requested))?;
        let index = site
            .load(&version)
            .await
            .map_err(|error| error.to_string())?;
        return Ok(check_report(&version, &index));
    }

    let mut output = format!(
        "Checking {} version(s) at {}:\n\n",
        site.versions().len(),
        site.root().display()
    );
    for (version, result) in site.load_all().await {
        match result {
            Ok(index) => output.push_str(&check_report(&version, &index)),
            Err(error) => {
                tracing::warn!("Skipping version while checking: {error}");
                output.push_str(&format!("{version}: {error}\n"));
            }
        }
    }
    Ok(output)
}

fn check_report(version: &str, index: &SearchIndex) -> String {
    let issues = validate(index);
    if issues.is_empty() {
        return format!("{version}: OK ({} record(s))\n", index.len());
    }

    let mut output = format!(
        "{version}: {} issue(s) in {} record(s)\n",
        issues.len(),
        index.len()
    );
    for issue in &issues {
        output.push_str(&format!("  • {issue}\n"));
    }
    output
}
