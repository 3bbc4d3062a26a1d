//! Plotkit command line entry point.

use anyhow::Result;
use clap::Parser;
use plotkit_common::init_logging;
use plotkit_config::ConfigLoader;
use std::path::PathBuf;
use tracing::info;

/// Render a graph manifest through one of the Plotkit backends.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph manifest file (.yaml, .json or .toml)
    #[arg(short, long)]
    manifest: PathBuf,

    /// Output file; the backend is picked from the extension unless
    /// overridden by configuration
    #[arg(short, long)]
    output: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut settings = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
    }

    // Initialize logging
    init_logging(&settings.logging.to_logging_config())?;

    info!("Starting plotkit");

    plotkit_cli::run(&args.manifest, &args.output, &settings)?;

    Ok(())
}
