//! Date type for curve keys and backdating arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CurveError, CurveResult};

/// A calendar date identifying one trading day's curve.
///
/// Newtype wrapper around `chrono::NaiveDate` providing the operations the
/// pipeline needs: ISO 8601 parsing/formatting, day arithmetic, weekday
/// checks, and the compact `YYYYMMDD` form used for cache file names.
///
/// # Example
///
/// ```rust
/// use yieldcast_core::types::Date;
///
/// let date = Date::parse("2024-07-25").unwrap();
/// assert_eq!(date.compact(), "20240725");
/// assert_eq!(date.to_string(), "2024-07-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CurveResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CurveError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CurveResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CurveError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date (negative moves backward).
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the compact `YYYYMMDD` form used as a cache key.
    #[must_use]
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        let date = Date::parse("2024-07-25").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 25);
        assert_eq!(date.to_string(), "2024-07-25");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2024-02-30").is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_compact_key() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(date.compact(), "20240102");
    }

    #[test]
    fn test_add_days_backward() {
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(date.add_days(-1), Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_weekend() {
        let saturday = Date::from_ymd(2024, 7, 27).unwrap();
        let friday = Date::from_ymd(2024, 7, 26).unwrap();
        assert!(saturday.is_weekend());
        assert!(!friday.is_weekend());
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::parse("2024-07-25").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-07-25\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
