//! Time-range filtering with the inclusive-day bound convention.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::types::LogRecord;

/// A resolved time window. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window from the compact `start*end` range string; either
    /// side may be empty.
    ///
    /// Every bound — supplied, missing, or unparseable — is advanced by
    /// one day before use. On supplied dates the advance makes the named
    /// day itself pass the strict comparison ("inclusive of the given
    /// day"); that it also shifts defaulted bounds is long-standing
    /// product behavior and is kept as-is.
    pub fn from_range(range: &str) -> Self {
        let (start, end) = range.split_once('*').unwrap_or((range, ""));
        Self {
            start: resolve_bound(start),
            end: resolve_bound(end),
        }
    }

    /// Strict containment: both bounds are exclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant > self.start && instant < self.end
    }

    /// Whether a record passes the filter. Records whose timestamp does
    /// not parse are excluded.
    pub fn admits(&self, record: &LogRecord) -> bool {
        parse_timestamp(record.timestamp()).is_some_and(|ts| self.contains(ts))
    }
}

/// Resolve one range side: parse it as a calendar date and advance one
/// day; fall back to the current instant, advanced the same way, when
/// the side is absent or does not parse.
fn resolve_bound(side: &str) -> DateTime<Utc> {
    let parsed = if side.is_empty() {
        None
    } else {
        parse_bound(side)
    };
    parsed.unwrap_or_else(Utc::now) + Duration::days(1)
}

fn parse_bound(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // ISO date, then the US-style form seen in older clients.
    for fmt in ["%Y-%m-%d", "%m-%d-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Parse a record timestamp as the sinks write them: RFC 3339 for the
/// message sinks, the zone-less web form for the request sink.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%a, %d %b %Y %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(ndt.and_utc());
        }
    }
    None
}
