//! Command implementations.

pub mod cache;
pub mod curve;
pub mod history;

pub use cache::CacheArgs;
pub use curve::CurveArgs;
pub use history::HistoryArgs;

use std::path::PathBuf;

use yieldcast_core::Date;
use yieldcast_feed::{SourceConfig, YieldCurveSource};

use crate::error::{CliError, CliResult};

/// Parses a YYYY-MM-DD argument.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Builds the data source, honoring a cache-dir override.
pub fn build_source(cache_dir: Option<PathBuf>) -> YieldCurveSource {
    let config = match cache_dir {
        Some(dir) => SourceConfig::with_cache_dir(dir),
        None => SourceConfig::default(),
    };
    YieldCurveSource::new(config)
}
