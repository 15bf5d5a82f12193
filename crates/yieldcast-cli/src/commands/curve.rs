//! Curve command implementation.

use clap::Args;

use yieldcast_feed::{CurveRequest, YieldCurveSource};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliResult;
use crate::output::print_curve;

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Resolve as of this date (YYYY-MM-DD). Defaults to the most recent
    /// curve the feed has.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Resolves and prints one curve.
pub async fn execute(
    args: CurveArgs,
    source: &YieldCurveSource,
    format: OutputFormat,
) -> CliResult<()> {
    let request = match args.date.as_deref() {
        Some(s) => CurveRequest::AsOf(parse_date(s)?),
        None => CurveRequest::Current,
    };

    let curve = source.resolve(request).await?;
    print_curve(&curve, format)
}
