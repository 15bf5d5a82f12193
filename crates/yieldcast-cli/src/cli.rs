//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CacheArgs, CurveArgs, HistoryArgs};

/// Yieldcast - US Treasury daily yield-curve fetcher
#[derive(Parser)]
#[command(name = "yieldcast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Cache directory (one JSON file per trading date)
    #[arg(long, env = "YIELDCAST_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the current curve, or the curve as of a date
    Curve(CurveArgs),

    /// Resolve the current curve plus the configured historical offsets
    History(HistoryArgs),

    /// Inspect or clear the cache entry for a single date
    Cache(CacheArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (compact JSON on one line)
    Minimal,
}
