//! Date and time parsing shared by every insight.
//!
//! Portal payloads mix ISO days, RFC 3339 timestamps and human strings such
//! as "22 Jan 2026"; everything funnels through [`parse_date`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Formats for day+month text that carries no year; the year is appended
/// before parsing.
const DAY_MONTH_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%b %d %Y", "%B %d %Y"];

/// Parses a calendar day, discarding any time of day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(s) {
        return Some(stamp.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(s, format) {
            return Some(stamp.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(s, format) {
            return Some(day);
        }
    }

    // Timestamps in shapes chrono does not know, e.g. "2026-01-22T10:00+0530"
    match (s.get(..10), s.as_bytes().get(10)) {
        (Some(day), Some(b'T')) => NaiveDate::parse_from_str(day, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Parses "22 Jan" style text by placing it in `year`.
pub fn parse_day_month(raw: &str, year: i32) -> Option<NaiveDate> {
    let s = raw.trim().trim_end_matches(',');
    if s.is_empty() {
        return None;
    }
    let with_year = format!("{s} {year}");
    DAY_MONTH_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&with_year, format).ok())
}

/// Strict `YYYY-MM-DD`, used where records are keyed by day.
pub fn parse_iso_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parses "HH:MM" or "HH:MM:SS".
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every day in `[start, end]`; empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

pub fn shift_years(day: NaiveDate, years: i32) -> Option<NaiveDate> {
    day.with_year(day.year() + years)
}

/// Hours between check-in and check-out, 0 when either is missing or the
/// checkout precedes the checkin.
pub fn worked_hours(time_in: Option<&str>, time_out: Option<&str>) -> f64 {
    match (time_in.and_then(parse_time), time_out.and_then(parse_time)) {
        (Some(start), Some(end)) if end >= start => {
            round_to((end - start).num_minutes() as f64 / 60.0, 2)
        }
        _ => 0.0,
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2026-01-22")]
    #[case(" 2026-01-22 ")]
    #[case("2026/01/22")]
    #[case("2026-01-22T18:45:00Z")]
    #[case("2026-01-22T23:30:00+05:30")]
    #[case("2026-01-22T09:00:00.123")]
    #[case("2026-01-22 09:00:00")]
    #[case("2026-01-22T10:00+0530")]
    #[case("22 Jan 2026")]
    #[case("22 January 2026")]
    #[case("22-Jan-2026")]
    #[case("Jan 22, 2026")]
    #[case("January 22 2026")]
    fn parses_day_shapes(#[case] raw: &str) {
        assert_eq!(parse_date(raw), Some(ymd(2026, 1, 22)));
    }

    #[rstest]
    #[case("")]
    #[case("garbage")]
    #[case("2026-02-30")]
    #[case("22 Jan")]
    fn rejects_non_days(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }

    #[test]
    fn day_month_takes_the_given_year() {
        assert_eq!(parse_day_month("22 Jan", 2026), Some(ymd(2026, 1, 22)));
        assert_eq!(parse_day_month("Jan 22,", 2025), Some(ymd(2025, 1, 22)));
        assert_eq!(parse_day_month("someday", 2025), None);
    }

    #[test]
    fn weekend_is_saturday_and_sunday() {
        // 2025-01-04 is a Saturday
        assert!(is_weekend(ymd(2025, 1, 4)));
        assert!(is_weekend(ymd(2025, 1, 5)));
        assert!(!is_weekend(ymd(2025, 1, 6)));
    }

    #[test]
    fn inclusive_day_iteration() {
        let days: Vec<_> = days_inclusive(ymd(2025, 1, 30), ymd(2025, 2, 2)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days_inclusive(ymd(2025, 2, 2), ymd(2025, 1, 30)).count(), 0);
    }

    #[rstest]
    #[case(Some("09:00"), Some("18:30"), 9.5)]
    #[case(Some("09:05"), Some("18:30"), 9.42)]
    #[case(Some("09:00:00"), Some("17:00:00"), 8.0)]
    #[case(Some("18:00"), Some("09:00"), 0.0)]
    #[case(None, Some("18:00"), 0.0)]
    #[case(Some("nine"), Some("18:00"), 0.0)]
    fn hours_between_times(
        #[case] time_in: Option<&str>,
        #[case] time_out: Option<&str>,
        #[case] expected: f64,
    ) {
        assert_eq!(worked_hours(time_in, time_out), expected);
    }
}
