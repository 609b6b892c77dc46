//! Weekday labels.

use smallcal_calendar::Weekday;

/// Two-letter weekday abbreviation.
pub fn weekday_abbr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

/// Single-letter weekday initial.
pub fn weekday_initial(weekday: Weekday) -> char {
    match weekday {
        Weekday::Sun | Weekday::Sat => 'S',
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
    }
}
