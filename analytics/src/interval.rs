//! Civil timestamp normalization between the local and backend zones.
//!
//! Timestamps travel as zone-naive strings; the trailing `Z` in the wire
//! format is a literal, not a zone marker. Callers supply local-zone
//! (UTC+5:30) civil times and the backend expects UTC civil times, so both
//! directions are a fixed-offset shift with no DST involvement.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Wire format for all interval timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Accepted when the primary format does not parse (backend rows sometimes
/// carry a space separator).
const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LOCAL_OFFSET_MINUTES: i64 = 5 * 60 + 30;

/// Time interval for queries with start and end timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: String,
    pub end: String,
}

impl Interval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Convert both endpoints from the local zone to the backend zone.
    pub fn to_backend_zone(&self) -> Interval {
        Interval {
            start: to_backend_zone(&self.start),
            end: to_backend_zone(&self.end),
        }
    }
}

fn parse_civil(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, FALLBACK_FORMAT))
        .ok()
}

/// Local civil time -> backend civil time (subtract the fixed offset).
///
/// A result landing exactly on 18:29:00 is nudged forward 59 seconds; the
/// backend treats that minute as a day-boundary bucket and the raw value
/// would land rows in the wrong day. Unparseable input is passed through
/// unchanged (a conversion warning is logged; bucketing may be off for such
/// rows).
pub fn to_backend_zone(timestamp: &str) -> String {
    match parse_civil(timestamp) {
        Some(local) => {
            let mut backend = local - Duration::minutes(LOCAL_OFFSET_MINUTES);
            let t = backend.time();
            if (t.hour(), t.minute(), t.second()) == (18, 29, 0) {
                backend += Duration::seconds(59);
            }
            backend.format(TIMESTAMP_FORMAT).to_string()
        }
        None => {
            warn!(timestamp, "conversion to backend zone failed; passing through unchanged");
            timestamp.to_string()
        }
    }
}

/// Backend civil time -> local civil time (add the fixed offset).
pub fn to_local_zone(timestamp: &str) -> String {
    match parse_civil(timestamp) {
        Some(backend) => {
            let local = backend + Duration::minutes(LOCAL_OFFSET_MINUTES);
            local.format(TIMESTAMP_FORMAT).to_string()
        }
        None => {
            warn!(timestamp, "conversion to local zone failed; passing through unchanged");
            timestamp.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_zone_subtracts_offset() {
        assert_eq!(to_backend_zone("2024-03-01T00:00:00Z"), "2024-02-29T18:30:00Z");
        assert_eq!(to_backend_zone("2024-03-21T23:59:59Z"), "2024-03-21T18:29:59Z");
    }

    #[test]
    fn test_local_zone_adds_offset() {
        assert_eq!(to_local_zone("2024-02-29T18:30:00Z"), "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_round_trip() {
        for ts in [
            "2024-01-15T10:30:45Z",
            "2023-12-31T23:59:59Z",
            "2024-06-01T05:30:00Z",
        ] {
            assert_eq!(to_local_zone(&to_backend_zone(ts)), ts);
        }
    }

    #[test]
    fn test_boundary_minute_is_nudged() {
        // local 23:59:00 -> backend 18:29:00, adjusted to 18:29:59
        assert_eq!(to_backend_zone("2024-03-21T23:59:00Z"), "2024-03-21T18:29:59Z");
        // one second either side is left alone
        assert_eq!(to_backend_zone("2024-03-21T23:59:01Z"), "2024-03-21T18:29:01Z");
        assert_eq!(to_backend_zone("2024-03-21T23:58:59Z"), "2024-03-21T18:28:59Z");
    }

    #[test]
    fn test_fallback_format_accepted() {
        assert_eq!(to_backend_zone("2024-03-01 00:00:00"), "2024-02-29T18:30:00Z");
        assert_eq!(to_local_zone("2024-02-29 18:30:00"), "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(to_backend_zone("not-a-timestamp"), "not-a-timestamp");
        assert_eq!(to_local_zone("2024/03/01"), "2024/03/01");
    }

    #[test]
    fn test_interval_conversion() {
        let interval = Interval::new("2024-03-01T00:00:00Z", "2024-03-21T23:59:59Z");
        let backend = interval.to_backend_zone();
        assert_eq!(backend.start, "2024-02-29T18:30:00Z");
        assert_eq!(backend.end, "2024-03-21T18:29:59Z");
    }
}
