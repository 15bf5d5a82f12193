//! Pipeline configuration.
//!
//! Everything the original widget kept as ambient constants (cache location,
//! feed URL, comparison offsets) lives here as an explicit struct handed to
//! [`YieldCurveSource::new`](crate::YieldCurveSource::new), so tests can
//! substitute different policies.

use std::path::PathBuf;

/// URL template for the daily Treasury yield-curve XML feed.
/// `{year}` is replaced with the four-digit year being fetched.
pub const TREASURY_FEED_URL: &str = "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/pages/xml?data=daily_treasury_yield_curve&field_tdr_date_value={year}";

/// One historical-comparison offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryOffset {
    /// Label the resolved curve is keyed under, e.g. `"1w"`.
    pub label: String,
    /// Calendar days to step back from today before business-day adjustment.
    pub days: i64,
}

impl HistoryOffset {
    /// Creates a new offset.
    #[must_use]
    pub fn new(label: impl Into<String>, days: i64) -> Self {
        Self {
            label: label.into(),
            days,
        }
    }
}

/// Configuration for a [`YieldCurveSource`](crate::YieldCurveSource).
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Directory holding one cache file per trading date.
    pub cache_dir: PathBuf,
    /// Feed URL template containing a `{year}` placeholder.
    pub feed_url: String,
    /// Offsets resolved by `resolve_with_history`, in display order.
    pub history_offsets: Vec<HistoryOffset>,
}

impl SourceConfig {
    /// Creates a config with production feed URL and default offsets,
    /// caching under the given directory.
    #[must_use]
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("yieldcast-cache"),
            feed_url: TREASURY_FEED_URL.to_string(),
            history_offsets: vec![HistoryOffset::new("1w", 7), HistoryOffset::new("2w", 14)],
        }
    }
}
