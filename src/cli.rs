use crate::record::Category;
use crate::search::DEFAULT_LIMIT;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "documenter-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the search indexes of a generated documentation site", long_about = None)]
pub struct Cli {
    /// Site root holding one directory per documentation version
    #[arg(global = true, short = 'r', long = "root", default_value = ".")]
    pub root: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a version's documentation records
    Search {
        query: String,
        /// Version to search (default: newest release)
        #[arg(short = 'v', long)]
        version: Option<String>,
        /// Search every discovered version
        #[arg(long = "all-versions", conflicts_with = "version")]
        all_versions: bool,
        /// Only match records of this category (page, section, module, type, method)
        #[arg(short = 'c', long)]
        category: Option<Category>,
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// List discovered versions with their record counts
    Versions,
    /// List a version's pages with per-page record counts
    Pages {
        #[arg(short = 'v', long)]
        version: Option<String>,
    },
    /// Validate index structure for one or all versions
    Check {
        #[arg(short = 'v', long)]
        version: Option<String>,
    },
    /// Report drift between two versions
    Diff { old: String, new: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["documenter-search", "search", "projection"]).unwrap();
        check!(cli.root == ".");
        let_assert!(
            Commands::Search {
                query,
                version,
                all_versions,
                category,
                limit,
            } = cli.command
        );
        check!(query == "projection");
        check!(version.is_none());
        check!(!all_versions);
        check!(category.is_none());
        check!(limit == DEFAULT_LIMIT);
    }

    #[test]
    fn test_search_with_flags() {
        let cli = Cli::try_parse_from([
            "documenter-search",
            "search",
            "dfw",
            "--root",
            "~/site",
            "-v",
            "v0.4.1",
            "-c",
            "method",
            "-n",
            "3",
        ])
        .unwrap();
        check!(cli.root == "~/site");
        let_assert!(
            Commands::Search {
                version,
                category,
                limit,
                ..
            } = cli.command
        );
        check!(version.as_deref() == Some("v0.4.1"));
        check!(category == Some(Category::Method));
        check!(limit == 3);
    }

    #[test]
    fn test_search_version_conflicts_with_all_versions() {
        let parsed = Cli::try_parse_from([
            "documenter-search",
            "search",
            "dfw",
            "-v",
            "dev",
            "--all-versions",
        ]);
        check!(parsed.is_err());
    }

    #[test]
    fn test_rejects_unknown_category() {
        let parsed = Cli::try_parse_from(["documenter-search", "search", "dfw", "-c", "chapter"]);
        check!(parsed.is_err());
    }

    #[test]
    fn test_diff_takes_two_versions() {
        let cli = Cli::try_parse_from(["documenter-search", "diff", "v0.4.0", "v0.4.1"]).unwrap();
        let_assert!(Commands::Diff { old, new } = cli.command);
        check!(old == "v0.4.0");
        check!(new == "v0.4.1");
    }

    #[test]
    fn test_global_root_after_subcommand() {
        let cli =
            Cli::try_parse_from(["documenter-search", "versions", "--root", "/srv/docs"]).unwrap();
        check!(cli.root == "/srv/docs");
        let_assert!(Commands::Versions = cli.command);
    }
}
