//! Resolves command-line input into a validated render request.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use smallcal_calendar::{CalendarError, YearBounds, YearSpan, parse_date, parse_year_list};

use crate::cli::{Cli, MARK_TODAY};

/// What to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A bordered table for one month.
    Month { year: i32, month: u8 },
    /// A condensed grid for one or more years. `separate` renders each year
    /// as its own block.
    Years { span: YearSpan, separate: bool },
}

/// A fully validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub view: View,
    pub mark: Option<NaiveDate>,
}

/// Validates the CLI input against `bounds`.
///
/// `today` supplies the default year and the date behind a bare `--mark`.
/// When no mark is requested, today is marked if `highlight_today` is set.
/// Only years that end up on screen are checked against `bounds`: with
/// `--years`, neither `--year` nor the current year is consulted.
pub fn resolve(
    cli: &Cli,
    bounds: YearBounds,
    highlight_today: bool,
    today: NaiveDate,
) -> Result<Request, CalendarError> {
    let year = cli.year.unwrap_or(today.year());

    let view = if let Some(month) = cli.month {
        let year = bounds.check(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        View::Month { year, month }
    } else if let Some(ref list) = cli.years {
        // Explicitly listed years are always built independently.
        View::Years {
            span: YearSpan::from_ranges(parse_year_list(list)?, bounds)?,
            separate: true,
        }
    } else {
        let span = match cli.number {
            Some(n) => YearSpan::contiguous(year, n, bounds)?,
            None => YearSpan::single(year, bounds)?,
        };
        View::Years {
            span,
            separate: cli.separate,
        }
    };

    let mark = if cli.no_mark {
        None
    } else {
        match cli.mark.as_deref() {
            Some(MARK_TODAY) => Some(today),
            Some(s) => Some(parse_date(s)?),
            None => highlight_today.then_some(today),
        }
    };

    debug!(?view, ?mark, "input resolved");
    Ok(Request { view, mark })
}
