//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Logging setup and Ctrl-C cancellation

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);

    until_interrupted(cmd.run(), tokio::signal::ctrl_c()).await
}

/// Runs `work` unless `interrupt` fires first, in which case the run fails.
async fn until_interrupted(
    work: impl Future<Output = anyhow::Result<()>>,
    interrupt: impl Future<Output = std::io::Result<()>>,
) -> anyhow::Result<()> {
    tokio::select! {
        result = work => result,
        _ = interrupt => {
            tracing::info!("interrupted");
            anyhow::bail!("interrupted")
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
