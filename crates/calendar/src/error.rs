//! Error types for the smallcal-calendar crate.

/// Error type for all fallible operations in the smallcal-calendar crate.
///
/// Every variant describes a user-input problem. Once a year, month or date
/// has been validated, nothing downstream of this crate can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year falls outside the accepted bounds.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYearRange {
        /// The rejected year.
        year: i32,
        /// Lowest accepted year.
        min: i32,
        /// Highest accepted year.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a date string is not a valid `YYYY-MM-DD` date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a year list or range cannot be parsed.
    #[error("invalid year list: {input:?} (expected e.g. 2024,2026 or 2020-2023)")]
    InvalidYearList {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a year span would contain no years.
    #[error("year span is empty")]
    EmptyYearSpan,

    /// Returned when configured year bounds are inverted or unsupported.
    #[error("invalid year bounds: {min}..={max}")]
    InvalidBounds {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year_range() {
        let err = CalendarError::InvalidYearRange {
            year: 1899,
            min: 1900,
            max: 2100,
        };
        assert_eq!(err.to_string(), "invalid year: 1899 (must be 1900..=2100)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_invalid_date_format() {
        let err = CalendarError::InvalidDateFormat {
            input: "2024/07/04".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: \"2024/07/04\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_empty_span() {
        assert_eq!(CalendarError::EmptyYearSpan.to_string(), "year span is empty");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
