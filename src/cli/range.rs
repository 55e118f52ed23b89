//! Date range arguments
//!
//! Range options take two values, START and END, each either a `%Y-%m-%d`
//! date or `-` to leave that bound at its default.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses one range bound; `-` means "use the default"
pub fn parse_bound(text: &str) -> Result<Option<NaiveDateTime>> {
    if text == "-" {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: '{}' (expected yyyy-mm-dd)", text))?;
    Ok(Some(date.and_time(NaiveTime::MIN)))
}

/// Parses a two-element bounds slice into optional start and end stamps
pub fn parse_bounds(bounds: &[String]) -> Result<(Option<NaiveDateTime>, Option<NaiveDateTime>)> {
    let start = bounds.first().map(String::as_str).unwrap_or("-");
    let end = bounds.get(1).map(String::as_str).unwrap_or("-");
    Ok((parse_bound(start)?, parse_bound(end)?))
}

/// Summary range: defaults to the last five days ending today
pub fn summary_range(bounds: &[String], today: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = parse_bounds(bounds)?;
    let default_start = today
        .checked_sub_days(Days::new(4))
        .unwrap_or(today)
        .and_time(NaiveTime::MIN);
    Ok((
        start.unwrap_or(default_start),
        end.unwrap_or_else(|| today.and_time(NaiveTime::MIN)),
    ))
}

/// Graph range: defaults to the current calendar month
pub fn graph_range(bounds: &[String], today: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = parse_bounds(bounds)?;
    let month_start = today.with_day(1).unwrap_or(today);
    let month_end = month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(today);
    Ok((
        start.unwrap_or_else(|| month_start.and_time(NaiveTime::MIN)),
        end.unwrap_or_else(|| month_end.and_time(NaiveTime::MIN)),
    ))
}
