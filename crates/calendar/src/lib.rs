//! # smallcal-calendar
//!
//! Gregorian day enumeration for calendar display grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, first weekday)"] -->|"MonthDays::new()"| B["MonthDays"]
//!     B -->|"Iterator"| C["CalendarDay (28..=42 cells)"]
//!     D["user text"] -->|"parse_date()"| E["NaiveDate"]
//!     D -->|"parse_year_list()"| F["year ranges"]
//!     F -->|"YearSpan::from_ranges()"| G["YearSpan"]
//!     H["YearBounds"] --> G
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Weekday;
//! use smallcal_calendar::{MonthDays, YearBounds, YearSpan, parse_date};
//!
//! // Every cell of the July 2023 grid, Sunday first
//! let cells: Vec<_> = MonthDays::new(2023, 7, Weekday::Sun).unwrap().collect();
//! assert_eq!(cells.len(), 42);
//!
//! // Validated spans
//! let span = YearSpan::contiguous(2024, 2, YearBounds::default()).unwrap();
//! assert_eq!(span.years(), &[2024, 2025]);
//!
//! let mark = parse_date("2023-07-04").unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDay` and weekday offsets |
//! | `month` | Month-day enumerator, month lengths and names |
//! | `span` | Year bounds and year spans |
//! | `parse` | Date and year-list parsing |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod parse;
mod span;

pub use chrono::{NaiveDate, Weekday};
pub use date::{CalendarDay, week_order, weekday_offset};
pub use error::CalendarError;
pub use month::{MONTH_NAMES, MonthDays, days_in_month, is_leap_year, month_name};
pub use parse::{parse_date, parse_year_list};
pub use span::{YearBounds, YearSpan};
