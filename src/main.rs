//! CLI entry point for pattern rendering and card composition

use clap::Parser;
use patterncard::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> patterncard::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "patterncard=warn" } else { "patterncard=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
