//! Yieldcast CLI - resolve, inspect, and cache US Treasury yield curves.
//!
//! # Usage
//!
//! ```bash
//! # Most recent curve
//! yieldcast curve
//!
//! # Curve as of a date (closest prior trading day when absent)
//! yieldcast curve --date 2024-07-25
//!
//! # Current curve plus the configured comparison offsets
//! yieldcast history
//!
//! # Cache administration (single date only)
//! yieldcast cache info --date 2024-07-25
//! yieldcast cache clear --date 2024-07-25
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let source = commands::build_source(cli.cache_dir);

    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &source, format).await?,
        Commands::History(args) => commands::history::execute(args, &source, format).await?,
        Commands::Cache(args) => commands::cache::execute(args, &source, format).await?,
    }

    Ok(())
}
