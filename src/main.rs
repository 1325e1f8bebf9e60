mod cli;
mod config;
mod domain;
mod error;
mod media;
mod workflows;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Settings;
use workflows::matchers::numbering::NumberingMatcher;
use workflows::report;
use workflows::scan::{scan, ScanOptions};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins over the verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("episode_scanner=debug")
        } else {
            EnvFilter::new("episode_scanner=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_file = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config_file)?;

    tracing::info!("Scanning {}", settings.root.display());

    let options = ScanOptions {
        filter: settings.filter,
        group_by: settings.group_by,
        order: settings.order,
    };
    let scanned = scan(&settings.root, &NumberingMatcher, &options)?;

    tracing::info!(
        "Found {} episode(s) in {} series ({} video(s) visited, {} skipped)",
        scanned.episodes.episode_count(),
        scanned.episodes.len(),
        scanned.visited,
        scanned.skipped
    );

    println!("{}", report::render(&scanned.episodes, settings.format)?);

    Ok(())
}
