//! History command implementation.

use clap::Args;

use yieldcast_feed::YieldCurveSource;

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::print_history;

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {}

/// Resolves the current curve plus the configured offsets and prints
/// whatever subset resolved.
pub async fn execute(
    _args: HistoryArgs,
    source: &YieldCurveSource,
    format: OutputFormat,
) -> CliResult<()> {
    let resolved = source.resolve_with_history().await;
    print_history(&resolved, format)
}
