//! Year bounds and year spans.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Inclusive range of years accepted from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    min: i32,
    max: i32,
}

impl YearBounds {
    /// Default lower bound.
    pub const DEFAULT_MIN: i32 = 1900;
    /// Default upper bound.
    pub const DEFAULT_MAX: i32 = 2100;

    /// Creates bounds `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidBounds`] if `min > max` or either end
    /// lies outside the representable date range.
    pub fn new(min: i32, max: i32) -> Result<Self, CalendarError> {
        // One year of slack on each side keeps overflow weeks representable.
        let lowest = NaiveDate::MIN.year() + 1;
        let highest = NaiveDate::MAX.year() - 1;
        if min > max || min < lowest || max > highest {
            return Err(CalendarError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lowest accepted year.
    pub fn min(self) -> i32 {
        self.min
    }

    /// Highest accepted year.
    pub fn max(self) -> i32 {
        self.max
    }

    /// Returns `true` if `year` is accepted.
    pub fn contains(self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Returns `year` unchanged if accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] otherwise.
    pub fn check(self, year: i32) -> Result<i32, CalendarError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(CalendarError::InvalidYearRange {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// A non-empty, ascending, duplicate-free list of years to render.
///
/// Every year has been checked against a [`YearBounds`], so downstream grid
/// construction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSpan {
    years: Vec<i32>,
}

impl YearSpan {
    /// A span holding a single year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `year` is out of bounds.
    pub fn single(year: i32, bounds: YearBounds) -> Result<Self, CalendarError> {
        Ok(Self {
            years: vec![bounds.check(year)?],
        })
    }

    /// `count` consecutive years starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyYearSpan`] if `count` is zero and
    /// [`CalendarError::InvalidYearRange`] if the first or last year is out of
    /// bounds.
    pub fn contiguous(start: i32, count: u32, bounds: YearBounds) -> Result<Self, CalendarError> {
        if count == 0 {
            return Err(CalendarError::EmptyYearSpan);
        }
        bounds.check(start)?;
        let last = i32::try_from(count - 1)
            .ok()
            .and_then(|n| start.checked_add(n))
            .ok_or(CalendarError::InvalidYearRange {
                year: i32::MAX,
                min: bounds.min(),
                max: bounds.max(),
            })?;
        bounds.check(last)?;
        Ok(Self {
            years: (start..=last).collect(),
        })
    }

    /// Years from inclusive ranges, as produced by
    /// [`parse_year_list`](crate::parse_year_list). Both ends of every range
    /// are checked before it is expanded, so an oversized range is rejected
    /// without allocating it. Order and overlaps are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyYearSpan`] if there are no ranges,
    /// [`CalendarError::InvalidYearList`] for an inverted range and
    /// [`CalendarError::InvalidYearRange`] for the first out-of-bounds end.
    pub fn from_ranges<I>(ranges: I, bounds: YearBounds) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = RangeInclusive<i32>>,
    {
        let mut years = Vec::new();
        for range in ranges {
            let (start, end) = range.into_inner();
            if end < start {
                return Err(CalendarError::InvalidYearList {
                    input: format!("{start}-{end}"),
                });
            }
            bounds.check(start)?;
            bounds.check(end)?;
            years.extend(start..=end);
        }
        Self::from_years(years, bounds)
    }

    /// An explicit list of years. Order and duplicates in the input are
    /// ignored; the span is always ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyYearSpan`] for an empty list and
    /// [`CalendarError::InvalidYearRange`] for the first out-of-bounds year.
    pub fn from_years<I>(years: I, bounds: YearBounds) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut years = years
            .into_iter()
            .map(|y| bounds.check(y))
            .collect::<Result<Vec<_>, _>>()?;
        if years.is_empty() {
            return Err(CalendarError::EmptyYearSpan);
        }
        years.sort_unstable();
        years.dedup();
        Ok(Self { years })
    }

    /// The years in ascending order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Earliest year.
    pub fn first(&self) -> i32 {
        self.years[0]
    }

    /// Latest year.
    pub fn last(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    /// Number of years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always `false`; spans are never empty.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns `true` if the years have no gaps.
    pub fn is_contiguous(&self) -> bool {
        self.years.windows(2).all(|w| w[1] == w[0] + 1)
    }

    /// Iterates the years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    /// Splits the span into one single-year span per year.
    pub fn each_year(&self) -> impl Iterator<Item = YearSpan> + '_ {
        self.years.iter().map(|&y| Self { years: vec![y] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let b = YearBounds::default();
        assert_eq!((b.min(), b.max()), (1900, 2100));
        assert!(b.contains(1900));
        assert!(b.contains(2100));
        assert!(!b.contains(1899));
        assert!(!b.contains(2101));
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert_eq!(
            YearBounds::new(2000, 1999).unwrap_err(),
            CalendarError::InvalidBounds {
                min: 2000,
                max: 1999
            }
        );
    }

    #[test]
    fn check_rejects_outside() {
        let b = YearBounds::default();
        assert_eq!(
            b.check(2101).unwrap_err(),
            CalendarError::InvalidYearRange {
                year: 2101,
                min: 1900,
                max: 2100
            }
        );
    }

    #[test]
    fn contiguous_span() {
        let span = YearSpan::contiguous(2023, 3, YearBounds::default()).unwrap();
        assert_eq!(span.years(), &[2023, 2024, 2025]);
        assert!(span.is_contiguous());
        assert_eq!(span.first(), 2023);
        assert_eq!(span.last(), 2025);
    }

    #[test]
    fn contiguous_zero_count() {
        assert_eq!(
            YearSpan::contiguous(2023, 0, YearBounds::default()).unwrap_err(),
            CalendarError::EmptyYearSpan
        );
    }

    #[test]
    fn contiguous_past_upper_bound() {
        assert_eq!(
            YearSpan::contiguous(2099, 3, YearBounds::default()).unwrap_err(),
            CalendarError::InvalidYearRange {
                year: 2101,
                min: 1900,
                max: 2100
            }
        );
    }

    #[test]
    fn from_years_sorts_and_dedups() {
        let span = YearSpan::from_years([2026, 2024, 2026], YearBounds::default()).unwrap();
        assert_eq!(span.years(), &[2024, 2026]);
        assert!(!span.is_contiguous());
    }

    #[test]
    fn from_years_empty() {
        assert_eq!(
            YearSpan::from_years(Vec::new(), YearBounds::default()).unwrap_err(),
            CalendarError::EmptyYearSpan
        );
    }

    #[test]
    fn each_year_splits() {
        let span = YearSpan::from_years([2024, 2030], YearBounds::default()).unwrap();
        let parts: Vec<_> = span.each_year().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].years(), &[2024]);
        assert_eq!(parts[1].years(), &[2030]);
    }

    #[test]
    fn single_is_contiguous() {
        let span = YearSpan::single(2024, YearBounds::default()).unwrap();
        assert_eq!(span.len(), 1);
        assert!(span.is_contiguous());
        assert!(!span.is_empty());
    }

    #[test]
    fn from_ranges_checks_both_ends() {
        let b = YearBounds::default();
        assert!(matches!(
            YearSpan::from_ranges([1899..=1901], b),
            Err(CalendarError::InvalidYearRange { year: 1899, .. })
        ));
        assert!(matches!(
            YearSpan::from_ranges([2000..=i32::MAX], b),
            Err(CalendarError::InvalidYearRange { year: i32::MAX, .. })
        ));
        let span = YearSpan::from_ranges([2030..=2030, 2024..=2025], b).unwrap();
        assert_eq!(span.years(), &[2024, 2025, 2030]);
    }

    #[test]
    fn from_ranges_rejects_inverted_and_empty() {
        let b = YearBounds::default();
        assert!(matches!(
            YearSpan::from_ranges([RangeInclusive::new(2025, 2020)], b),
            Err(CalendarError::InvalidYearList { .. })
        ));
        assert_eq!(
            YearSpan::from_ranges(std::iter::empty(), b).unwrap_err(),
            CalendarError::EmptyYearSpan
        );
    }
}
