//! Week and month arithmetic on calendar dates.

use chrono::{Datelike, Days, Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Monday on or before `date`.
///
/// Sunday goes back 6 days, every other day goes back `weekday - 1` days
/// (Monday = 1). Days before the first representable Monday clamp to
/// [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().number_from_monday() - 1);
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// [`week_start`] formatted as `YYYY-MM-DD`.
pub fn week_start_date(date: NaiveDate) -> String {
    format_date(week_start(date))
}

/// ISO-8601 `(year, week)` of `date`.
///
/// The year is the one owning the week's Thursday, so it may differ from the
/// calendar year around New Year.
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let w = date.iso_week();
    (w.year(), w.week())
}

/// First and last calendar day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(i64::from(date.day0()));
    let len = days_in_month(date.year(), date.month());
    let last = first + Duration::days(i64::from(len) - 1);
    (first, last)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap { 29 } else { 28 }
        }
    }
}
