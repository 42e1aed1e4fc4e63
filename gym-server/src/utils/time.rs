//! Clock abstraction and date helpers.
//!
//! All date arithmetic runs in UTC. Date-only values convert to Unix millis
//! at midnight UTC; handlers own the string parsing so repositories only
//! ever see typed values.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// One day in Unix milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Source of "now" for everything time-dependent.
///
/// Production uses [`SystemClock`]; tests inject [`FixedClock`] so payment
/// standings and default dates are deterministic.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;

    fn today(&self) -> NaiveDate {
        millis_to_date(self.now_millis())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Parse a strict YYYY-MM-DD date.
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Lenient parse for fields where bad input falls back instead of failing.
pub fn parse_date_or(date: &str, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").unwrap_or(fallback)
}

/// Midnight UTC of the given date in Unix millis.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Calendar date containing the given Unix millis instant.
pub fn millis_to_date(millis: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Date shifted forward by whole days, saturating at the calendar edge.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// First day of the month the given date falls in.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn millis_round_trip_at_midnight() {
        let date = d("2024-01-31");
        assert_eq!(millis_to_date(date_to_millis(date)), date);
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        // 2024-01-25 13:45:00 UTC
        let clock = FixedClock(date_to_millis(d("2024-01-25")) + 13 * 3_600_000 + 45 * 60_000);
        assert_eq!(clock.today(), d("2024-01-25"));
    }

    #[test]
    fn lenient_parse_falls_back() {
        let fallback = d("2024-06-01");
        assert_eq!(parse_date_or("2024-03-15", fallback), d("2024-03-15"));
        assert_eq!(parse_date_or("not-a-date", fallback), fallback);
        assert_eq!(parse_date_or(" 2024-03-15 ", fallback), d("2024-03-15"));
    }

    #[test]
    fn add_days_crosses_month_end() {
        assert_eq!(add_days(d("2024-01-01"), 30), d("2024-01-31"));
        assert_eq!(add_days(d("2024-02-01"), 30), d("2024-03-02"));
    }

    #[test]
    fn month_start_truncates() {
        assert_eq!(month_start(d("2024-02-29")), d("2024-02-01"));
    }

    #[test]
    fn strict_parse_rejects_garbage() {
        assert!(parse_date("2024-13-99").is_err());
        assert!(parse_date("2024-05-10").is_ok());
    }
}
