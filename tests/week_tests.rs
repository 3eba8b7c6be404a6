mod common;
use chrono::{Datelike, Duration, Weekday};
use common::date;
use workhours::core::week::{iso_week, month_bounds, week_start, week_start_date};
use workhours::export::csv::{all_data_filename, monthly_filename, weekly_filename};
use workhours::utils::date::parse_range;

#[test]
fn test_week_start_is_monday_and_stable_across_the_week() {
    let monday = date("2025-09-15");
    for offset in 0..7 {
        let d = monday + Duration::days(offset);
        assert_eq!(week_start(d), monday, "day {d}");
        assert_eq!(week_start_date(d), "2025-09-15");
    }
    assert_eq!(week_start(monday).weekday(), Weekday::Mon);
}

#[test]
fn test_week_start_across_month_and_year_boundaries() {
    // Sunday goes back six days
    assert_eq!(week_start_date(date("2025-03-02")), "2025-02-24");
    assert_eq!(week_start_date(date("2025-01-01")), "2024-12-30");
    assert_eq!(week_start_date(date("2024-03-01")), "2024-02-26");

    for s in ["2023-12-31", "2024-02-29", "2026-10-19", "2000-01-01"] {
        let ws = week_start(date(s));
        assert_eq!(ws.weekday(), Weekday::Mon);
        assert_eq!(week_start(ws), ws);
    }
}

#[test]
fn test_iso_week_numbers() {
    assert_eq!(iso_week(date("2025-09-15")), (2025, 38));
    assert_eq!(iso_week(date("2024-12-30")), (2025, 1));
    assert_eq!(iso_week(date("2021-01-03")), (2020, 53));
    assert_eq!(iso_week(date("2026-10-19")), (2026, 43));
}

#[test]
fn test_month_bounds() {
    assert_eq!(
        month_bounds(date("2024-02-14")),
        (date("2024-02-01"), date("2024-02-29"))
    );
    assert_eq!(
        month_bounds(date("2025-02-01")),
        (date("2025-02-01"), date("2025-02-28"))
    );
    assert_eq!(
        month_bounds(date("2025-12-31")),
        (date("2025-12-01"), date("2025-12-31"))
    );
}

#[test]
fn test_export_filenames() {
    assert_eq!(
        weekly_filename(date("2025-09-15")),
        "2025-09-15_week_2025_38.csv"
    );
    assert_eq!(
        weekly_filename(date("2024-12-30")),
        "2024-12-30_week_2025_01.csv"
    );
    assert_eq!(monthly_filename(date("2025-03-09")), "month_2025_03.csv");
    assert_eq!(all_data_filename(date("2025-03-09")), "all_data_2025_03_09.csv");
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(
        parse_range("2025").unwrap(),
        (date("2025-01-01"), date("2025-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        (date("2024-02-01"), date("2024-02-29"))
    );
    assert_eq!(
        parse_range("2025-09-01:2025-09-30").unwrap(),
        (date("2025-09-01"), date("2025-09-30"))
    );
    assert_eq!(
        parse_range("2024-11:2025-01").unwrap(),
        (date("2024-11-01"), date("2025-01-31"))
    );
    assert!(parse_range("2025-9").is_err());
    assert!(parse_range("2025:2025-01").is_err());
    assert!(parse_range("2025-13").is_err());
}

#[test]
fn test_week_start_clamps_at_the_start_of_the_calendar() {
    use chrono::NaiveDate;

    // whatever weekday MIN is, there is no earlier Monday to go back to
    let first = NaiveDate::MIN;
    assert_eq!(week_start(first), first);

    let monday = week_start(NaiveDate::MAX);
    assert_eq!(monday.weekday(), Weekday::Mon);
}
