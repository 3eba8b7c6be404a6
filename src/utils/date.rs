use crate::core::week::{DATE_FORMAT, days_in_month};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a `--range` expression into inclusive bounds.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `START:END` (both sides in the same format)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(r.to_string());

    match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r} (start and end must have the same format)"
                )));
            }

            let (from, _) = period_bounds(start).ok_or_else(invalid)?;
            let (_, to) = period_bounds(end).ok_or_else(invalid)?;
            Ok((from, to))
        }
        None => period_bounds(r.trim()).ok_or_else(invalid),
    }
}

/// First and last day of a year, a month or a single day.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p.get(0..4)?.parse().ok()?;
            let m: u32 = p.get(5..7)?.parse().ok()?;
            let first = NaiveDate::from_ymd_opt(y, m, 1)?;
            let last = NaiveDate::from_ymd_opt(y, m, days_in_month(y, m))?;
            Some((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}
