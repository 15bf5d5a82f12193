//! # Yieldcast Feed
//!
//! The cached-fetch data pipeline for the US Treasury daily yield-curve feed.
//!
//! One HTTP GET retrieves an entire year of daily records; parsed curves are
//! persisted one-file-per-date and trusted forever once written (no TTL).
//! Resolution prefers the cache, falls back to the feed, and falls back again
//! to any stale cache entry on feed failure, so callers always receive either
//! a usable curve or an explicit absence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use yieldcast_feed::{CurveRequest, SourceConfig, YieldCurveSource};
//!
//! # async fn run() -> yieldcast_core::CurveResult<()> {
//! let source = YieldCurveSource::new(SourceConfig::with_cache_dir("./cache"));
//! let curve = source.resolve(CurveRequest::Current).await?;
//! println!("{} ({} points)", curve.date, curve.points.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod client;
mod config;
mod parse;
mod source;

pub use cache::{CacheEntryInfo, CurveCache, CACHE_FORMAT_VERSION};
pub use client::{FeedClient, HttpFeedClient};
pub use config::{HistoryOffset, SourceConfig, TREASURY_FEED_URL};
pub use parse::{extract_points, parse_feed};
pub use source::{CurveRequest, YieldCurveSource};
