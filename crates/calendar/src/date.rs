//! Gregorian calendar day with weekday context.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A single day cell of a calendar: year, month, day-of-month and weekday.
///
/// Backed by a [`NaiveDate`], so the four components are always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    /// Creates a new `CalendarDay` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month,
    /// and [`CalendarError::InvalidYearRange`] if the year is beyond what the
    /// date library can represent.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self::from_date)
            .ok_or(CalendarError::InvalidYearRange {
                year,
                min: NaiveDate::MIN.year(),
                max: NaiveDate::MAX.year(),
            })
    }

    /// Wraps an existing [`NaiveDate`].
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the underlying date.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        // month() is always 1..=12
        self.date.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.date.day() as u8
    }

    /// Returns the weekday.
    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// Returns `true` for the 1st of any month.
    pub fn is_first_of_month(self) -> bool {
        self.date.day() == 1
    }

    /// Returns `true` if this day belongs to the given `(year, month)`.
    pub fn is_in_month(self, year: i32, month: u8) -> bool {
        self.year() == year && self.month() == month
    }

    /// Returns the row index of this day in a week starting on `first`.
    pub fn weekday_offset(self, first: Weekday) -> usize {
        weekday_offset(self.weekday(), first)
    }

    /// Returns the following day, or `None` past the end of the supported
    /// date range.
    pub fn next(self) -> Option<Self> {
        self.date.succ_opt().map(Self::from_date)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Number of days from `first` forward to `weekday` (0..=6).
///
/// With `first = Sunday`, Sunday maps to 0 and Saturday to 6.
pub fn weekday_offset(weekday: Weekday, first: Weekday) -> usize {
    ((weekday.num_days_from_sunday() + 7 - first.num_days_from_sunday()) % 7) as usize
}

/// The seven weekdays in display order, starting at `first`.
pub fn week_order(first: Weekday) -> [Weekday; 7] {
    let mut order = [first; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let day = CalendarDay::new(2024, 2, 29).unwrap();
        assert_eq!(day.year(), 2024);
        assert_eq!(day.month(), 2);
        assert_eq!(day.day(), 29);
        assert_eq!(day.weekday(), Weekday::Thu);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDay::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day_non_leap() {
        assert_eq!(
            CalendarDay::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert_eq!(
            CalendarDay::new(2023, 1, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 1,
                max_day: 31,
            }
        );
    }

    #[test]
    fn first_of_month() {
        assert!(CalendarDay::new(2023, 7, 1).unwrap().is_first_of_month());
        assert!(!CalendarDay::new(2023, 7, 2).unwrap().is_first_of_month());
    }

    #[test]
    fn next_year_wrap() {
        let next = CalendarDay::new(2023, 12, 31).unwrap().next().unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (2024, 1, 1));
    }

    #[test]
    fn offset_sunday_first() {
        assert_eq!(weekday_offset(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(weekday_offset(Weekday::Mon, Weekday::Sun), 1);
        assert_eq!(weekday_offset(Weekday::Sat, Weekday::Sun), 6);
    }

    #[test]
    fn offset_monday_first() {
        assert_eq!(weekday_offset(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(weekday_offset(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(weekday_offset(Weekday::Wed, Weekday::Mon), 2);
    }

    #[test]
    fn week_order_sunday() {
        let order = week_order(Weekday::Sun);
        assert_eq!(order[0], Weekday::Sun);
        assert_eq!(order[6], Weekday::Sat);
    }

    #[test]
    fn week_order_matches_offsets() {
        for first in week_order(Weekday::Mon) {
            for (i, wd) in week_order(first).into_iter().enumerate() {
                assert_eq!(weekday_offset(wd, first), i);
            }
        }
    }

    #[test]
    fn ord_follows_date() {
        let a = CalendarDay::new(2023, 12, 31).unwrap();
        let b = CalendarDay::new(2024, 1, 1).unwrap();
        assert!(a < b);
    }
}
