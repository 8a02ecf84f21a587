use clap::Parser;
use documenter_search::cli::{Cli, Commands};
use documenter_search::commands::{
    CheckRequest, DiffRequest, PagesRequest, SearchRequest, handle_check, handle_diff,
    handle_pages, handle_search, handle_versions,
};
use documenter_search::site::{SiteDocs, expand_tilde};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let root = expand_tilde(&cli.root).into_owned();
    let site = SiteDocs::discover(&root)?;

    let result = match cli.command {
        Commands::Search {
            query,
            version,
            all_versions,
            category,
            limit,
        } => {
            let request = SearchRequest {
                query,
                version,
                all_versions,
                category,
                limit,
            };
            handle_search(&site, request).await
        }
        Commands::Versions => handle_versions(&site).await,
        Commands::Pages { version } => handle_pages(&site, PagesRequest { version }).await,
        Commands::Check { version } => handle_check(&site, CheckRequest { version }).await,
        Commands::Diff { old, new } => handle_diff(&site, DiffRequest { old, new }).await,
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }

    Ok(())
}
