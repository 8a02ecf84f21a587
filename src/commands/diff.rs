//! Diff handler: drift report between two version indexes.

use crate::commands::{display_location, resolve_version};
use crate::diff::DiffReport;
use crate::site::SiteDocs;

#[derive(Debug, Clone)]
pub struct DiffRequest {
    /// Older version name.
    pub old: String,
    /// Newer version name.
    pub new: String,
}

/// Compares two versions' indexes. Both must resolve and load; a drift report
/// against a broken index would be noise.
pub async fn handle_diff(site: &SiteDocs, request: DiffRequest) -> Result<String, String> {
    let old_version = resolve_version(site, Some(&request.old))?;
    let new_version = resolve_version(site, Some(&request.new))?;

    let old_index = site
        .load(&old_version)
        .await
        .map_err(|error| error.to_string())?;
    let new_index = site
        .load(&new_version)
        .await
        .map_err(|error| error.to_string())?;

    let report = crate::diff::diff(&old_index, &new_index);
    if report.is_empty() {
        return Ok(format!(
            "No drift between '{old_version}' and '{new_version}'.\n"
        ));
    }

    let mut output = format!("Drift from '{old_version}' to '{new_version}':\n\n");
    output.push_str(&format_report(&report));
    Ok(output)
}

fn format_report(report: &DiffReport) -> String {
    let mut output = String::new();

    if !report.added.is_empty() {
        output.push_str(&format!("Anchors added ({}):\n", report.added.len()));
        for location in &report.added {
            output.push_str(&format!("  + {location}\n"));
        }
        output.push('\n');
    }
    if !report.removed.is_empty() {
        output.push_str(&format!("Anchors removed ({}):\n", report.removed.len()));
        for location in &report.removed {
            output.push_str(&format!("  - {location}\n"));
        }
        output.push('\n');
    }
    if !report.changed.is_empty() {
        output.push_str(&format!("Anchors changed ({}):\n", report.changed.len()));
        for change in &report.changed {
            let fields: Vec<&str> = change.fields.iter().map(|field| field.as_str()).collect();
            output.push_str(&format!("  ~ {} ({})\n", change.location, fields.join(", ")));
        }
        output.push('\n');
    }
    if !report.pages_added.is_empty() {
        output.push_str(&format!("Pages added ({}):\n", report.pages_added.len()));
        for path in &report.pages_added {
            output.push_str(&format!("  + {}\n", display_location(path)));
        }
        output.push('\n');
    }
    if !report.pages_removed.is_empty() {
        output.push_str(&format!("Pages removed ({}):\n", report.pages_removed.len()));
        for path in &report.pages_removed {
            output.push_str(&format!("  - {}\n", display_location(path)));
        }
        output.push('\n');
    }

    output
}
