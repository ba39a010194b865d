//! Deployment timestamp parsing.
//!
//! Accepts the compact stamp the deployment engine emits first, then the
//! common invariant-culture forms. Every result is normalized to UTC; text
//! without an offset is taken to already be UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// `yyyyMMddTHHmmssZ`, e.g. `20210102T030405Z`.
const DEPLOYMENT_STAMP: &str = "%Y%m%dT%H%M%SZ";

/// Date-time forms without an offset, tried in order.
const NAIVE_DATE_TIMES: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

/// Date-only forms, read as midnight UTC.
/// `%B` also accepts the abbreviated month name when parsing.
const NAIVE_DATES: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
];

/// Parse `text` as an instant in UTC.
pub fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, DEPLOYMENT_STAMP) {
        return Some(stamp.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text).or_else(|_| DateTime::parse_from_rfc2822(text)) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATE_TIMES
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NAIVE_DATES
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
