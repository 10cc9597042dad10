use chrono::{NaiveDate, Weekday};

use crate::error::GraphError;

const WEEK_SEPARATOR: &str = "-S";
const WEEKS_PER_YEAR: f64 = 52.0;

/// Splits a `YYYY-SWW` label into its year and week number.
pub fn parse_week_label(label: &str) -> Result<(i32, u32), GraphError> {
    let invalid = || GraphError::InvalidWeekLabel(label.to_string());

    let (year_str, week_str) = label.split_once(WEEK_SEPARATOR).ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let week: u32 = week_str.parse().map_err(|_| invalid())?;

    // Week 53 only exists in long ISO years.
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;

    Ok((year, week))
}

/// Places a week on a continuous axis: `year + week / 52`.
///
/// Not calendar-accurate, only monotonic within a year.
pub fn week_to_x(label: &str) -> Result<f64, GraphError> {
    let (year, week) = parse_week_label(label)?;
    Ok(year as f64 + week as f64 / WEEKS_PER_YEAR)
}
