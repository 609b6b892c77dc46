//! Text layouts for smallcal.
//!
//! | Layout | Entry point |
//! |--------|-------------|
//! | Monthly bordered table | [`render_month`] |
//! | Condensed year, horizontal or vertical | [`render_years`] |
//!
//! Both return the output as lines without trailing newlines. Rendering is
//! deterministic: the same inputs always produce identical lines.
//!
//! # Architecture
//!
//! ```text
//! render_month()
//!   ├─ month_weeks()         (monthly.rs, MonthDays from smallcal-calendar)
//!   └─ BoxChars::rule/row    (border.rs)
//! render_years()
//!   ├─ build_grids()         (yearly.rs, WeekGrid from smallcal-grid)
//!   ├─ horizontal / vertical blocks
//!   └─ join_blocks()         side-by-side concatenation
//! ```

pub mod border;
pub mod monthly;
pub mod names;
pub mod yearly;

pub use border::{BorderStyle, BoxChars};
pub use monthly::{CELL_WIDTH, MonthOptions, Week, month_weeks, render_month};
pub use names::{weekday_abbr, weekday_initial};
pub use yearly::{Orientation, YearOptions, build_grids, render_years};
