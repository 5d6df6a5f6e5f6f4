//! ISO 8601 instant parsing shared by validation and duration derivation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse an ISO 8601 string into a UTC instant.
///
/// Accepts a calendar date with optional time-of-day and optional zone
/// designator (`Z` or a numeric offset). Strings without a zone are taken
/// as UTC. Returns `None` for anything chrono cannot resolve to a real
/// instant, including format-valid but impossible calendar dates such as
/// `2022-02-30`.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    // ISO permits a comma decimal marker and a space separator; chrono
    // expects a dot and `T`.
    let value = value.trim().replace(',', ".").replace(' ', "T");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offsets RFC 3339 rejects: no-colon (`+0200`) and hours-only (`+02`),
    // plus minute-precision times.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(&value, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // Zone-less strings; a bare trailing Z is equivalent once stripped.
    let naive = value.trim_end_matches(['z', 'Z']);
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}
