// src/export/csv.rs

//! CSV generation and export filenames.
//!
//! The output layout is an interchange contract: previously exported files
//! must stay byte-for-byte reproducible, so quoting is done here by hand
//! instead of through a general-purpose CSV writer.

use crate::core::week::{format_date, iso_week};
use crate::models::Entry;
use chrono::{Datelike, NaiveDate};
use std::borrow::Cow;

/// Category, subcategory, hours, memo. No date column.
pub const EXPORT_HEADERS: [&str; 4] = ["技術分野", "小分類", "作業時間(h)", "メモ"];

/// Prepended to written files so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Quote a field if it contains a comma, a newline or a double quote,
/// doubling any inner quotes. Everything else passes through unchanged.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('\n') || field.contains('"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render entries as CSV text, or `None` when there is nothing to export.
///
/// With `week_start_date`, that date is written alone on the first line,
/// before the header.
pub fn generate_csv(entries: &[&Entry], week_start_date: Option<&str>) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut csv = String::new();

    if let Some(week) = week_start_date {
        csv.push_str(week);
        csv.push('\n');
    }

    csv.push_str(&EXPORT_HEADERS.join(","));
    csv.push('\n');

    for e in entries {
        let hours = e.hours().to_string();
        let row = [
            escape_field(e.category()),
            escape_field(e.subcategory()),
            escape_field(&hours),
            escape_field(e.memo()),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Some(csv)
}

pub fn with_bom(csv: &str) -> String {
    format!("{UTF8_BOM}{csv}")
}

/// `{weekStartDate}_week_{isoYear}_{isoWeek:02}.csv`
pub fn weekly_filename(week_start: NaiveDate) -> String {
    let (year, week) = iso_week(week_start);
    format!("{}_week_{}_{:02}.csv", format_date(week_start), year, week)
}

/// `month_{year}_{month:02}.csv`
pub fn monthly_filename(today: NaiveDate) -> String {
    format!("month_{}_{:02}.csv", today.year(), today.month())
}

/// `all_data_{year}_{month:02}_{day:02}.csv`
pub fn all_data_filename(today: NaiveDate) -> String {
    format!(
        "all_data_{}_{:02}_{:02}.csv",
        today.year(),
        today.month(),
        today.day()
    )
}
