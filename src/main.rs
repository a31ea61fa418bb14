//! CLI entry point for the tile collapse generator

use clap::Parser;
use tilecollapse::io::cli::{Cli, CollapseRunner};
use tracing_subscriber::EnvFilter;

fn main() -> tilecollapse::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = CollapseRunner::new(cli);
    runner.process().map(|_| ())
}
