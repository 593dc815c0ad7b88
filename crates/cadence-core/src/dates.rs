//! Calendar-date parsing and interval arithmetic.
//!
//! All dates at the storage boundary are `YYYY-MM-DD` strings in local time;
//! everything in here converts between that representation and
//! [`chrono::NaiveDate`] and computes the elapsed-day/week/month counts the
//! expansion engine matches against.

use chrono::{Datelike, Local, NaiveDate};

/// The one accepted wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` string, falling back to today on malformed input.
///
/// The fallback is deliberate: a single rule with a corrupt date must degrade
/// to a logged warning rather than abort expansion for every other rule in
/// the store. Callers that want strict behavior validate before expansion.
pub fn parse_date(s: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            log::warn!("malformed date {:?}, substituting today", s);
            today()
        }
    }
}

/// Strict variant of [`parse_date`] for boundary validation.
pub fn try_parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Signed number of days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Whole weeks elapsed from `start` to `end`, floored.
///
/// This is elapsed time divided by a fixed 7-day period, not a count of
/// calendar-week boundaries crossed: matching stays relative to the anchor's
/// position within its own week.
pub fn whole_weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end).div_euclid(7)
}

/// Calendar months elapsed from `start` to `end`, by year*12+month
/// arithmetic. Days of month are ignored.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_months = i64::from(start.year()) * 12 + i64::from(start.month0());
    let end_months = i64::from(end.year()) * 12 + i64::from(end.month0());
    end_months - start_months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn parse_round_trips_wire_format() {
        assert_eq!(parse_date("2024-01-31"), d("2024-01-31"));
        assert_eq!(format_date(d("2024-01-31")), "2024-01-31");
    }

    #[test]
    fn malformed_dates_fall_back_to_today() {
        assert_eq!(parse_date("01/31/2024"), today());
        assert_eq!(parse_date("not a date"), today());
        assert_eq!(parse_date(""), today());
        assert!(try_parse_date("2024-13-01").is_none());
        assert!(try_parse_date("2024-02-29").is_some());
        assert!(try_parse_date("2023-02-29").is_none());
    }

    #[test]
    fn day_arithmetic_is_signed() {
        assert_eq!(days_between(d("2024-01-01"), d("2024-01-10")), 9);
        assert_eq!(days_between(d("2024-01-10"), d("2024-01-01")), -9);
        // Leap day counts.
        assert_eq!(days_between(d("2024-02-28"), d("2024-03-01")), 2);
    }

    #[test]
    fn week_count_floors_partial_weeks() {
        let mon = d("2024-01-01");
        assert_eq!(whole_weeks_between(mon, d("2024-01-07")), 0);
        assert_eq!(whole_weeks_between(mon, d("2024-01-08")), 1);
        assert_eq!(whole_weeks_between(mon, d("2024-01-14")), 1);
        assert_eq!(whole_weeks_between(mon, d("2024-01-15")), 2);
    }

    #[test]
    fn month_count_ignores_day_of_month() {
        assert_eq!(months_between(d("2024-01-31"), d("2024-02-01")), 1);
        assert_eq!(months_between(d("2024-01-01"), d("2024-12-31")), 11);
        assert_eq!(months_between(d("2023-11-15"), d("2024-02-15")), 3);
        assert_eq!(months_between(d("2024-03-01"), d("2024-03-31")), 0);
    }
}
