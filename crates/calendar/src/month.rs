//! Month-day enumeration for calendar display grids.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::date::{CalendarDay, weekday_offset};
use crate::error::CalendarError;

/// English month names (index 0 = January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// Returns the English name of `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[month as usize - 1])
}

/// Every day cell of one month's display grid, in order.
///
/// The sequence starts on the `first_weekday` on or before the 1st of the
/// month and ends on the last day of the week holding the month's last day,
/// so its length is always a multiple of 7 (28 to 42). Leading and trailing
/// overflow days carry their own month and year, which lets callers tell
/// month boundaries apart precisely.
///
/// The iterator is `Clone`; cloning before iteration restarts the sequence.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use smallcal_calendar::MonthDays;
///
/// let days: Vec<_> = MonthDays::new(2024, 2, Weekday::Sun).unwrap().collect();
/// assert_eq!(days.len(), 35);
/// assert_eq!((days[0].month(), days[0].day()), (1, 28));
/// ```
#[derive(Debug, Clone)]
pub struct MonthDays {
    year: i32,
    month: u8,
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthDays {
    /// Creates the enumerator for `(year, month)` with weeks starting on
    /// `first_weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidYearRange`] if the grid would leave the
    /// representable date range.
    pub fn new(year: i32, month: u8, first_weekday: Weekday) -> Result<Self, CalendarError> {
        let last_day = days_in_month(year, month)?;
        let out_of_range = || CalendarError::InvalidYearRange {
            year,
            min: NaiveDate::MIN.year(),
            max: NaiveDate::MAX.year(),
        };

        let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1).ok_or_else(out_of_range)?;
        let last = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(last_day))
            .ok_or_else(out_of_range)?;

        let lead = weekday_offset(first.weekday(), first_weekday) as u64;
        let trail = 6 - weekday_offset(last.weekday(), first_weekday) as u64;
        let start = first
            .checked_sub_days(Days::new(lead))
            .ok_or_else(out_of_range)?;
        let end = last
            .checked_add_days(Days::new(trail))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            year,
            month,
            next: Some(start),
            end,
        })
    }

    /// The year of the enumerated month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The enumerated month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Iterates only the days that belong to the enumerated month.
    pub fn in_month(self) -> impl Iterator<Item = CalendarDay> {
        let (year, month) = (self.year, self.month);
        self.filter(move |d| d.is_in_month(year, month))
    }
}

impl Iterator for MonthDays {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(CalendarDay::from_date(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(d) if d <= self.end => self.end.signed_duration_since(d).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthDays {}

impl std::iter::FusedIterator for MonthDays {}
