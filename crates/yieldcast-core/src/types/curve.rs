//! Yield-curve value types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Where a resolved curve came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Fetched and parsed from the remote feed during this resolution.
    Fresh,
    /// Read back from a previously persisted cache entry.
    Cached,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Fresh => write!(f, "fresh"),
            Provenance::Cached => write!(f, "cached"),
        }
    }
}

/// One observed point on a yield curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldPoint {
    /// Maturity label, e.g. `"10Y"`.
    pub label: String,
    /// Months to maturity.
    pub months: u32,
    /// Yield in percent (e.g. `4.19` for 4.19%).
    #[serde(rename = "yield")]
    pub yield_pct: Decimal,
}

impl YieldPoint {
    /// Creates a new yield point.
    #[must_use]
    pub fn new(label: impl Into<String>, months: u32, yield_pct: Decimal) -> Self {
        Self {
            label: label.into(),
            months,
            yield_pct,
        }
    }
}

/// A snapshot of the Treasury yield curve for one trading day.
///
/// Immutable once constructed. `points` is ordered by ascending maturity and
/// may hold fewer than the full 13 tenors when the feed leaves fields blank;
/// consumers must not assume any particular subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldCurve {
    /// Trading date of the snapshot.
    pub date: Date,
    /// Observed points, ascending by `months`.
    pub points: Vec<YieldPoint>,
    /// Whether this curve came from the feed or from cache.
    pub provenance: Provenance,
}

impl YieldCurve {
    /// Creates a curve from already-ordered points.
    #[must_use]
    pub fn new(date: Date, points: Vec<YieldPoint>, provenance: Provenance) -> Self {
        debug_assert!(
            points.windows(2).all(|p| p[0].months < p[1].months),
            "curve points must be strictly ascending by maturity"
        );
        Self {
            date,
            points,
            provenance,
        }
    }

    /// True when the curve carries no usable points.
    ///
    /// An empty curve is treated identically to total absence by callers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the same curve tagged with the given provenance.
    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Looks up a point by its maturity label.
    #[must_use]
    pub fn point(&self, label: &str) -> Option<&YieldPoint> {
        self.points.iter().find(|p| p.label == label)
    }
}
