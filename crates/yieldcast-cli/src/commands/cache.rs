//! Cache administration commands.

use clap::{Args, Subcommand};

use yieldcast_core::Date;
use yieldcast_feed::YieldCurveSource;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliResult;
use crate::output::print_single;

/// Arguments for the cache command.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Cache subcommands. Both operate on a single date; there is no bulk clear.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Show the cache entry for a date (default: today)
    Info(CacheDateArgs),

    /// Delete the cache entry for a date (default: today)
    Clear(CacheDateArgs),
}

/// Date selector shared by the cache subcommands.
#[derive(Args, Debug)]
pub struct CacheDateArgs {
    /// Date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Runs a cache subcommand.
pub async fn execute(
    args: CacheArgs,
    source: &YieldCurveSource,
    format: OutputFormat,
) -> CliResult<()> {
    match args.command {
        CacheCommand::Info(date_args) => {
            let date = parse_optional(date_args.date.as_deref())?;
            match source.cache_info(date).await? {
                Some(info) => print_single(&info, format)?,
                None => println!("No cache entry."),
            }
        }
        CacheCommand::Clear(date_args) => {
            let date = parse_optional(date_args.date.as_deref())?;
            if source.clear_cache(date).await? {
                println!("Cache entry deleted.");
            } else {
                println!("No cache entry.");
            }
        }
    }
    Ok(())
}

fn parse_optional(s: Option<&str>) -> CliResult<Option<Date>> {
    s.map(parse_date).transpose()
}
