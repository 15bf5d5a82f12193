//! Error types for the Yieldcast pipeline.
//!
//! Every failure mode of a single date's resolution maps onto one of these
//! variants; callers above the pipeline convert them into "no data for this
//! key" rather than propagating them further.

use thiserror::Error;

/// A specialized Result type for Yieldcast operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// The main error type for yield-curve resolution.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// The remote feed call failed or timed out.
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// The feed text contained no parsable record blocks.
    #[error("Feed format error: {message}")]
    FeedFormat {
        /// Description of what made the feed unusable.
        message: String,
    },

    /// The requested date predates every record in the feed.
    #[error("No data on or before {requested}")]
    NoDataForDate {
        /// The requested date (ISO 8601).
        requested: String,
    },

    /// A cache entry could not be read (missing is not an error; corrupt is).
    #[error("Cache read failed for {path}: {message}")]
    CacheRead {
        /// Path of the offending entry.
        path: String,
        /// Underlying I/O or deserialization failure.
        message: String,
    },

    /// A cache entry could not be written.
    #[error("Cache write failed for {path}: {message}")]
    CacheWrite {
        /// Path of the offending entry.
        path: String,
        /// Underlying I/O or serialization failure.
        message: String,
    },

    /// Error in date parsing or calendar arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CurveError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a feed format error.
    #[must_use]
    pub fn feed_format(message: impl Into<String>) -> Self {
        Self::FeedFormat {
            message: message.into(),
        }
    }

    /// Creates a no-data-for-date error.
    #[must_use]
    pub fn no_data_for_date(requested: impl Into<String>) -> Self {
        Self::NoDataForDate {
            requested: requested.into(),
        }
    }

    /// Creates a cache read error.
    #[must_use]
    pub fn cache_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CacheRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a cache write error.
    #[must_use]
    pub fn cache_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CacheWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
