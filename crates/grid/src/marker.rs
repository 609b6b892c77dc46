//! Day classification.

use smallcal_calendar::{CalendarDay, NaiveDate};

/// What a grid cell represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The 1st of a month.
    FirstOfMonth,
    /// The marked date (usually today).
    Marked,
    /// Any other real day.
    Regular,
    /// Padding before the first or after the last real day.
    Blank,
}

/// Classifies `day` against an optional marked date.
///
/// `Marked` takes priority over `FirstOfMonth`.
///
/// ```
/// use smallcal_calendar::{CalendarDay, NaiveDate};
/// use smallcal_grid::{MarkerKind, classify};
///
/// let day = CalendarDay::new(2024, 3, 1).unwrap();
/// assert_eq!(classify(day, None), MarkerKind::FirstOfMonth);
/// assert_eq!(classify(day, Some(day.date())), MarkerKind::Marked);
/// ```
pub fn classify(day: CalendarDay, mark: Option<NaiveDate>) -> MarkerKind {
    if mark == Some(day.date()) {
        MarkerKind::Marked
    } else if day.is_first_of_month() {
        MarkerKind::FirstOfMonth
    } else {
        MarkerKind::Regular
    }
}
