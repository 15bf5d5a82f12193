//! Business-day checks for historical-comparison backdating.
//!
//! This is NOT a full US market calendar. It recognizes weekends plus the
//! three fixed-date holidays the original data source was observed to skip
//! (New Year's Day, Independence Day, Christmas Day). Floating holidays
//! (Thanksgiving, Labor Day, MLK Day, …) and weekend-observed shifts are a
//! known, documented limitation; backdating past an unrecognized holiday is
//! absorbed by the resolver's closest-prior-date fallback instead.

use crate::types::Date;

/// Fixed-date holidays recognized by the backdating check, as (month, day).
const FIXED_HOLIDAYS: [(u32, u32); 3] = [(1, 1), (7, 4), (12, 25)];

/// Returns true if the date is neither a weekend nor a recognized holiday.
#[must_use]
pub fn is_business_day(date: Date) -> bool {
    if date.is_weekend() {
        return false;
    }
    !FIXED_HOLIDAYS.contains(&(date.month(), date.day()))
}

/// Steps backward from `date` (inclusive) to the nearest business day.
#[must_use]
pub fn previous_business_day(date: Date) -> Date {
    let mut current = date;
    while !is_business_day(current) {
        current = current.add_days(-1);
    }
    current
}
