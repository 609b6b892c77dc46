//! Parsing of user-supplied dates and year lists.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parses a `YYYY-MM-DD` date.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateFormat`] for anything else, including
/// well-formed but nonexistent dates such as `2023-02-29`.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CalendarError::InvalidDateFormat {
            input: input.to_string(),
        }
    })
}

/// Parses a comma-separated list of years and inclusive `a-b` ranges.
///
/// Items are returned unexpanded: `"2020-2022,2030"` yields
/// `[2020..=2022, 2030..=2030]`. Bounds are not checked here; pass the
/// result to [`YearSpan::from_ranges`](crate::YearSpan::from_ranges), which
/// checks both ends of every range before expanding it.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYearList`] if an item is not a year or a
/// range runs backwards, and [`CalendarError::EmptyYearSpan`] if the list is
/// blank.
pub fn parse_year_list(input: &str) -> Result<Vec<RangeInclusive<i32>>, CalendarError> {
    let invalid = || CalendarError::InvalidYearList {
        input: input.to_string(),
    };

    if input.trim().is_empty() {
        return Err(CalendarError::EmptyYearSpan);
    }

    input
        .split(',')
        .map(str::trim)
        .map(|item| match item.split_once('-') {
            Some((start, end)) => {
                let start: i32 = start.trim().parse().map_err(|_| invalid())?;
                let end: i32 = end.trim().parse().map_err(|_| invalid())?;
                if end < start {
                    return Err(invalid());
                }
                Ok(start..=end)
            }
            None => {
                let year: i32 = item.parse().map_err(|_| invalid())?;
                Ok(year..=year)
            }
        })
        .collect()
}
