//! Feed parsing.
//!
//! The Treasury feed is an Atom-style document of per-date `<entry>` blocks,
//! each carrying dozens of `d:`-prefixed numeric fields of which 13 are
//! consumed. The schema is fixed and known, so extraction is a handful of
//! regular expressions; everything schema-shaped is kept behind
//! [`extract_points`] so the strategy could move to a structured-markup
//! parser without touching callers.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use yieldcast_core::{CurveError, CurveResult, Date, Provenance, YieldCurve, YieldPoint, TENORS};

/// Feed field names, parallel to [`TENORS`].
const FEED_FIELDS: [&str; 13] = [
    "BC_1MONTH",
    "BC_2MONTH",
    "BC_3MONTH",
    "BC_4MONTH",
    "BC_6MONTH",
    "BC_1YEAR",
    "BC_2YEAR",
    "BC_3YEAR",
    "BC_5YEAR",
    "BC_7YEAR",
    "BC_10YEAR",
    "BC_20YEAR",
    "BC_30YEAR",
];

static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<entry\b[^>]*>.*?</entry>").expect("valid entry regex"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<d:NEW_DATE[^>]*>(\d{4}-\d{2}-\d{2})").expect("valid date regex"));

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<d:(BC_[0-9A-Z_]+)[^>]*>([^<]*)<").expect("valid field regex"));

/// Parses the raw feed text into a curve.
///
/// With a `target` date: selects the exact-date record if present, otherwise
/// the record with the latest date not after the target. Without one: selects
/// the last record in the document (assumed chronologically latest).
///
/// # Errors
///
/// - `FeedFormat` when the text contains no dated record blocks.
/// - `NoDataForDate` when every record postdates the target.
pub fn parse_feed(raw: &str, target: Option<Date>) -> CurveResult<YieldCurve> {
    let records: Vec<(Date, &str)> = ENTRY_RE
        .find_iter(raw)
        .filter_map(|m| {
            let block = m.as_str();
            record_date(block).map(|date| (date, block))
        })
        .collect();

    if records.is_empty() {
        return Err(CurveError::feed_format("no record blocks in feed"));
    }

    let (date, block) = select_record(&records, target)?;

    Ok(YieldCurve::new(
        date,
        extract_points(block),
        Provenance::Fresh,
    ))
}

/// Picks the record for the target date, or the latest one when no target.
fn select_record<'a>(
    records: &[(Date, &'a str)],
    target: Option<Date>,
) -> CurveResult<(Date, &'a str)> {
    let Some(target) = target else {
        let (date, block) = records[records.len() - 1];
        return Ok((date, block));
    };

    if let Some(&(date, block)) = records.iter().find(|(date, _)| *date == target) {
        return Ok((date, block));
    }

    // Closest prior date. The feed skips weekends and market holidays, so an
    // absent target usually lands on the previous trading day.
    records
        .iter()
        .filter(|(date, _)| *date <= target)
        .max_by_key(|(date, _)| *date)
        .copied()
        .ok_or_else(|| CurveError::no_data_for_date(target.to_string()))
}

fn record_date(block: &str) -> Option<Date> {
    let captures = DATE_RE.captures(block)?;
    Date::parse(&captures[1]).ok()
}

/// Extracts the named maturity fields from one record block, in the fixed
/// tenor order. Blank, `N/A`, and non-numeric values are silently omitted,
/// so the result may hold fewer than 13 points.
pub fn extract_points(block: &str) -> Vec<YieldPoint> {
    let mut values = std::collections::HashMap::new();
    for captures in FIELD_RE.captures_iter(block) {
        let (_, [field, text]) = captures.extract();
        values.insert(field.to_string(), text.trim().to_string());
    }

    TENORS
        .iter()
        .zip(FEED_FIELDS.iter())
        .filter_map(|(tenor, field)| {
            let text = values.get(*field)?;
            if text.is_empty() || text.eq_ignore_ascii_case("N/A") {
                return None;
            }
            let yield_pct: Decimal = text.parse().ok()?;
            Some(YieldPoint::new(tenor.label, tenor.months, yield_pct))
        })
        .collect()
}
