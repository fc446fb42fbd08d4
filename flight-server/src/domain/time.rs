//! Timestamp handling for scheduled flights.
//!
//! Flight data carries ISO-8601 instants such as `2024-03-15T09:00:00Z` or
//! `2024-03-15T14:30:00+05:30`. Every edge in the catalog must be comparable
//! with every other, so offset-less timestamps are pinned to UTC rather than
//! left naive.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};

/// A time-zone-aware instant. The original offset is kept for display.
pub type Timestamp = DateTime<FixedOffset>;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Formats accepted for timestamps carrying an explicit offset, after `Z`
/// has been rewritten to `+00:00`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Formats accepted for offset-less timestamps (interpreted as UTC).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 instant.
///
/// A trailing `Z` means UTC. Timestamps without any offset are taken as UTC.
///
/// # Examples
///
/// ```
/// use flight_server::domain::parse_instant;
///
/// let a = parse_instant("2024-03-15T09:00:00Z").unwrap();
/// let b = parse_instant("2024-03-15T14:30:00+05:30").unwrap();
/// assert_eq!(a, b);
///
/// assert!(parse_instant("15/03/2024 09:00").is_err());
/// ```
pub fn parse_instant(s: &str) -> Result<Timestamp, TimeError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TimeError::new(s, "empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }

    let with_offset = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(body) => format!("{body}+00:00"),
        None => trimmed.to_string(),
    };

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    Err(TimeError::new(s, "expected ISO-8601 date and time"))
}

/// Express a duration as fractional minutes.
pub fn as_minutes(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => duration.num_seconds() as f64 / 60.0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting as RFC 3339 and parsing back yields the same instant
        #[test]
        fn rfc3339_roundtrip(secs in 0i64..4_000_000_000, offset_mins in -720i32..=840) {
            let offset = FixedOffset::east_opt(offset_mins * 60).unwrap();
            let t = DateTime::from_timestamp(secs, 0).unwrap().with_timezone(&offset);
            let parsed = parse_instant(&t.to_rfc3339()).unwrap();
            prop_assert_eq!(parsed, t);
        }
    }
}
