//! Lenient date and time parsing for attendance rows.
//!
//! Upstream attendance sources are inconsistent about textual formats, so
//! each field is tried against an ordered list of patterns and the first
//! success wins; no pattern is privileged except by list order. Callers drop
//! rows that fail every pattern, treating a malformed field as a data-quality
//! condition rather than an error.

use chrono::{NaiveDate, NaiveTime};

/// Accepted date patterns, tried in order.
///
/// `%m`/`%d` match both padded and unpadded digits, so `06/03/2024` and
/// `6/3/2024` parse with the same pattern.
pub const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Accepted time patterns, tried in order.
pub const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Parses a date field using the first matching pattern.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Parses a time-of-day field using the first matching pattern.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn test_parse_date_padded_us_format() {
        assert_eq!(parse_date("06/03/2024"), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_parse_date_unpadded_us_format() {
        assert_eq!(parse_date("6/3/2024"), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_parse_date_iso_format() {
        assert_eq!(parse_date("2024-06-03"), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(parse_date("  06/03/2024  "), Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert_eq!(parse_date("02/30/2024"), None);
        assert_eq!(parse_date("13/01/2024"), None);
    }

    #[test]
    fn test_parse_date_rejects_unknown_formats() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("June 3, 2024"), None);
        assert_eq!(parse_date("03.06.2024"), None);
    }

    #[test]
    fn test_parse_time_24_hour() {
        assert_eq!(parse_time("8:00"), Some(time(8, 0, 0)));
        assert_eq!(parse_time("08:00"), Some(time(8, 0, 0)));
        assert_eq!(parse_time("17:45"), Some(time(17, 45, 0)));
    }

    #[test]
    fn test_parse_time_with_seconds() {
        assert_eq!(parse_time("08:00:30"), Some(time(8, 0, 30)));
        assert_eq!(parse_time("8:10:59"), Some(time(8, 10, 59)));
    }

    #[test]
    fn test_parse_time_12_hour_clock() {
        assert_eq!(parse_time("8:00 AM"), Some(time(8, 0, 0)));
        assert_eq!(parse_time("5:30 PM"), Some(time(17, 30, 0)));
        assert_eq!(parse_time("12:00 AM"), Some(time(0, 0, 0)));
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("08:61"), None);
    }

    #[test]
    fn test_parse_time_rejects_unknown_formats() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("eight"), None);
        assert_eq!(parse_time("8h30"), None);
    }
}
