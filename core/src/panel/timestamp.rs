//! Timestamp display.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Offsets without the RFC 3339 colon, such as `+0200`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render `raw` in `tz`.
///
/// Input carrying an offset is converted. Naive date-times are read as
/// wall-clock time in `tz`, while a bare date means UTC midnight, as
/// browsers read it. Returns `None` when `raw` is not a timestamp.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = raw.trim();

    let with_offset = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    });
    if let Some(parsed) = with_offset {
        return Some(display(parsed.with_timezone(tz)));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return match tz.from_local_datetime(&naive) {
            LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => Some(display(local)),
            LocalResult::None => None,
        };
    }

    let midnight = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?.and_hms_opt(0, 0, 0)?;
    Some(display(Utc.from_utc_datetime(&midnight).with_timezone(tz)))
}

/// Render milliseconds since the Unix epoch in `tz`.
pub fn format_epoch_millis<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp_millis(millis).map(|utc| display(utc.with_timezone(tz)))
}

fn display<Tz>(moment: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    moment.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_rfc3339_is_converted() {
        let paris = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp("2025-06-01T08:30:00Z", &paris).as_deref(),
            Some("01/06/2025 10:30:00")
        );
    }

    #[test]
    fn test_naive_is_wall_clock() {
        let paris = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp("2025-06-01T08:30:00.123456", &paris).as_deref(),
            Some("01/06/2025 08:30:00")
        );
        assert_eq!(
            format_timestamp("2025-06-01 08:30:00", &Utc).as_deref(),
            Some("01/06/2025 08:30:00")
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(format_timestamp("yesterday", &Utc).is_none());
        assert!(format_timestamp("", &Utc).is_none());
    }

    #[test]
    fn test_compact_offset_is_converted() {
        assert_eq!(
            format_timestamp("2025-06-01T10:30:00+0200", &Utc).as_deref(),
            Some("01/06/2025 08:30:00")
        );
        assert_eq!(
            format_timestamp("2025-06-01 10:30:00.5+0200", &Utc).as_deref(),
            Some("01/06/2025 08:30:00")
        );
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        assert_eq!(
            format_timestamp("2025-06-01", &Utc).as_deref(),
            Some("01/06/2025 00:00:00")
        );
        let paris = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp("2025-06-01", &paris).as_deref(),
            Some("01/06/2025 02:00:00")
        );
        assert!(format_timestamp("2025-13-01", &Utc).is_none());
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(
            format_epoch_millis(1_748_766_600_000, &Utc).as_deref(),
            Some("01/06/2025 08:30:00")
        );
        assert_eq!(
            format_epoch_millis(0, &FixedOffset::east_opt(3600).unwrap()).as_deref(),
            Some("01/01/1970 01:00:00")
        );
        assert!(format_epoch_millis(i64::MAX, &Utc).is_none());
    }
}
