//! Monthly view: a bordered 7-column table.

use tracing::debug;

use smallcal_calendar::{
    CalendarDay, CalendarError, MonthDays, NaiveDate, Weekday, month_name, week_order,
};

use crate::border::BorderStyle;
use crate::names::weekday_abbr;

/// Width of one table cell, borders excluded.
pub const CELL_WIDTH: usize = 4;

/// Options for [`render_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOptions {
    first_weekday: Weekday,
    border: BorderStyle,
}

impl MonthOptions {
    /// Sunday-first, single-line border.
    pub fn new() -> Self {
        Self {
            first_weekday: Weekday::Sun,
            border: BorderStyle::Single,
        }
    }

    /// Sets the first column's weekday.
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// Sets the border style.
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// The first column's weekday.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The border style.
    pub fn border(&self) -> BorderStyle {
        self.border
    }
}

impl Default for MonthOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One table row: the month's days, `None` for overflow cells.
pub type Week = [Option<CalendarDay>; 7];

/// The weeks of `(year, month)` with overflow days blanked out.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_weeks(year: i32, month: u8, first_weekday: Weekday) -> Result<Vec<Week>, CalendarError> {
    let cells: Vec<Option<CalendarDay>> = MonthDays::new(year, month, first_weekday)?
        .map(|d| d.is_in_month(year, month).then_some(d))
        .collect();
    Ok(cells
        .chunks_exact(7)
        .map(|w| std::array::from_fn(|i| w[i]))
        .collect())
}

fn day_cell(day: Option<CalendarDay>, mark: Option<NaiveDate>) -> String {
    match day {
        None => " ".repeat(CELL_WIDTH),
        Some(d) if mark == Some(d.date()) => format!("[{:>2}]", d.day()),
        Some(d) => format!(" {:>2} ", d.day()),
    }
}

/// Renders `(year, month)` as a titled, bordered table.
///
/// Day numbers are right-aligned; the day equal to `mark` is bracketed.
/// Overflow cells are blank.
///
/// ```
/// use smallcal_render::{MonthOptions, render_month};
///
/// let lines = render_month(2024, 2, None, &MonthOptions::default()).unwrap();
/// assert_eq!(lines[0].trim(), "February 2024");
/// assert_eq!(lines[1], "┌────┬────┬────┬────┬────┬────┬────┐");
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
#[tracing::instrument(skip(options))]
pub fn render_month(
    year: i32,
    month: u8,
    mark: Option<NaiveDate>,
    options: &MonthOptions,
) -> Result<Vec<String>, CalendarError> {
    let name = month_name(month)?;
    let weeks = month_weeks(year, month, options.first_weekday)?;
    let border = options.border.chars();
    let table_width = 7 * CELL_WIDTH + 8;

    let mut lines = Vec::with_capacity(weeks.len() * 2 + 4);
    let title = format!("{name} {year}");
    lines.push(format!("{title:^table_width$}").trim_end().to_string());
    lines.push(border.rule(border.top, 7, CELL_WIDTH));

    let header: Vec<String> = week_order(options.first_weekday)
        .into_iter()
        .map(|wd| format!(" {} ", weekday_abbr(wd)))
        .collect();
    lines.push(border.row(header.iter().map(String::as_str)));

    for week in &weeks {
        lines.push(border.rule(border.middle, 7, CELL_WIDTH));
        let cells: Vec<String> = week.iter().map(|d| day_cell(*d, mark)).collect();
        lines.push(border.row(cells.iter().map(String::as_str)));
    }
    lines.push(border.rule(border.bottom, 7, CELL_WIDTH));

    debug!(weeks = weeks.len(), "month table rendered");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_2024_weeks() {
        let weeks = month_weeks(2024, 2, Weekday::Sun).unwrap();
        assert_eq!(weeks.len(), 5);
        // Feb 1 2024 is a Thursday.
        assert!(weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(weeks[0][4].unwrap().day(), 1);
        assert_eq!(weeks[4][4].unwrap().day(), 29);
        assert!(weeks[4][5].is_none());
        assert!(weeks[4][6].is_none());
    }

    #[test]
    fn day_cells() {
        let d = CalendarDay::new(2024, 2, 9).unwrap();
        assert_eq!(day_cell(Some(d), None), "  9 ");
        assert_eq!(day_cell(Some(d), Some(d.date())), "[ 9]");
        assert_eq!(day_cell(None, Some(d.date())), "    ");
    }

    #[test]
    fn header_row_monday_first() {
        let opts = MonthOptions::new().with_first_weekday(Weekday::Mon);
        let lines = render_month(2024, 2, None, &opts).unwrap();
        assert_eq!(lines[2], "│ Mo │ Tu │ We │ Th │ Fr │ Sa │ Su │");
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            render_month(2024, 13, None, &MonthOptions::default()).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn marked_day_bracketed() {
        let mark = NaiveDate::from_ymd_opt(2024, 2, 14);
        let lines = render_month(2024, 2, mark, &MonthOptions::default()).unwrap();
        let hits: Vec<_> = lines.iter().filter(|l| l.contains("[14]")).collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn mark_in_other_month_not_shown() {
        let mark = NaiveDate::from_ymd_opt(2024, 3, 1);
        let lines = render_month(2024, 2, mark, &MonthOptions::default()).unwrap();
        assert!(lines.iter().all(|l| !l.contains('[')));
    }
}
