use chrono::{prelude::*, Duration, LocalResult};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("The date: {0} is not a valid calendar date, expected the format YYYY-MM-DD")]
pub struct InvalidDateError(pub String);

/// Parses a calendar date of the form `YYYY-MM-DD`
pub fn parse_calendar_date(datestr: &str) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::parse_from_str(datestr.trim(), "%Y-%m-%d")
        .map_err(|_| InvalidDateError(datestr.to_string()))
}

/// The first millisecond of `date` in the given timezone.
///
/// Some timezones skip midnight when switching to daylight saving time,
/// in which case the day starts at the first valid local time after it.
pub fn start_of_day(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => match tz.from_local_datetime(&(midnight + Duration::hours(1))) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
            LocalResult::None => Utc.from_utc_datetime(&midnight).timestamp_millis(),
        },
    }
}

pub fn to_local(timestamp_millis: i64, tz: &Tz) -> DateTime<Tz> {
    tz.timestamp_millis_opt(timestamp_millis)
        .earliest()
        .unwrap_or_else(|| tz.timestamp_nanos(0))
}

/// Formats as e.g. `Thursday, October 15, 2026`
pub fn format_long_date(timestamp_millis: i64, tz: &Tz) -> String {
    to_local(timestamp_millis, tz)
        .format("%A, %B %-d, %Y")
        .to_string()
}

/// Formats as e.g. `2026-10-15`
pub fn format_short_date(timestamp_millis: i64, tz: &Tz) -> String {
    to_local(timestamp_millis, tz).format("%F").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-02-29",
            "2020-2-09",
            " 2026-10-15 ",
            "1965-03-02",
            "1969-12-31",
            "2101-01-01",
        ];

        for date in &valid_dates {
            assert!(parse_calendar_date(date).is_ok(), "{}", date);
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2020-0-1",
            "2020-1-0",
            "15/10/2026",
            "",
        ];

        for date in &invalid_dates {
            assert!(parse_calendar_date(date).is_err(), "{}", date);
        }
    }

    #[test]
    fn start_of_day_respects_timezone() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(start_of_day(date, &Tz::UTC), 1792022400000);
        // Oslo is UTC+2 in October
        assert_eq!(
            start_of_day(date, &chrono_tz::Europe::Oslo),
            1792022400000 - 1000 * 60 * 60 * 2
        );
    }

    #[test]
    fn start_of_day_skips_missing_midnight() {
        // Santiago moved clocks from 00:00 to 01:00 on this day
        let date = NaiveDate::from_ymd_opt(2022, 9, 11).unwrap();
        let tz = chrono_tz::America::Santiago;
        let start = to_local(start_of_day(date, &tz), &tz);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.hour(), 1);
    }

    #[test]
    fn handles_dates_before_the_epoch() {
        let date = parse_calendar_date("1965-03-02").unwrap();
        let ts = start_of_day(date, &Tz::UTC);
        assert!(ts < 0);
        assert_eq!(format_short_date(ts, &Tz::UTC), "1965-03-02");
        assert_eq!(format_long_date(ts, &Tz::UTC), "Tuesday, March 2, 1965");
    }

    #[test]
    fn it_formats_dates() {
        let ts = 1792022400000 + 1000 * 60 * 60 * 13;
        assert_eq!(format_long_date(ts, &Tz::UTC), "Thursday, October 15, 2026");
        assert_eq!(format_short_date(ts, &Tz::UTC), "2026-10-15");
        assert_eq!(
            format_short_date(ts, &chrono_tz::Pacific::Auckland),
            "2026-10-16"
        );
    }
}
