//! Binary crate for the `weather-check` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Running one-off smoke checks against the live weather API
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
