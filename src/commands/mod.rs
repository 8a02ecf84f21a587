//! Command handlers behind the CLI.
//!
//! Each handler takes the discovered site and a request, and returns formatted
//! human output as `Result<String, String>`. Version-level load failures
//! degrade to per-version notices wherever more than one version is in play;
//! they only become hard errors when the user asked for that exact version.

pub mod check;
pub mod diff;
pub mod pages;
pub mod search;
pub mod versions;

pub use check::*;
pub use diff::*;
pub use pages::*;
pub use search::*;
pub use versions::*;

use crate::site::SiteDocs;

/// Resolves an optional requested version against the discovered set,
/// falling back to the site default. Unknown names come back as an error
/// carrying close-match suggestions.
pub(crate) fn resolve_version(
    site: &SiteDocs,
    requested: Option<&str>,
) -> Result<String, String> {
    let Some(name) = requested else {
        return Ok(site.default_version().to_string());
    };
    if site.has_version(name) {
        return Ok(name.to_string());
    }

    let suggestions = site.suggest(name);
    let mut message = format!("Version '{name}' not found.");
    if suggestions.is_empty() {
        message.push('\n');
    } else {
        message.push_str(" Did you mean one of these?\n\n");
        for suggestion in suggestions {
            message.push_str(&format!("  • {suggestion}\n"));
        }
    }
    message.push_str(&format!(
        "\nAvailable versions: {}",
        site.versions().join(", ")
    ));
    Err(message)
}

/// Human form of a location; the site root's location is the empty string.
pub(crate) fn display_location(location: &str) -> &str {
    if location.is_empty() {
        "site root"
    } else {
        location
    }
}
