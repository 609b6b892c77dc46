//! Condensed calendar grids.
//!
//! A [`WeekGrid`] lays every day of a run of years out as seven weekday rows
//! by N week-columns. Each cell carries a [`MarkerKind`] from [`classify`],
//! and a [`GlyphSet`] turns markers into characters.
//!
//! # Quick start
//!
//! ```
//! use smallcal_calendar::{NaiveDate, Weekday, YearBounds, YearSpan};
//! use smallcal_grid::{GlyphSet, MarkerKind, WeekGrid};
//!
//! let span = YearSpan::single(2023, YearBounds::default()).unwrap();
//! let mark = NaiveDate::from_ymd_opt(2023, 7, 4);
//! let grid = WeekGrid::build(&span, Weekday::Sun, mark);
//!
//! let (row, col) = grid.position(mark.unwrap()).unwrap();
//! assert_eq!(row, 2); // Tuesday
//! assert_eq!(grid.cell(row, col).unwrap().kind(), MarkerKind::Marked);
//!
//! let glyphs = GlyphSet::default();
//! let line: String = grid.row(row).iter().map(|c| glyphs.cell_glyph(c)).collect();
//! assert_eq!(line.chars().count(), grid.columns());
//! ```
//!
//! # Architecture
//!
//! ```text
//! WeekGrid::build()
//!   ├─ MonthDays::new() per month   (smallcal-calendar)
//!   ├─ skip overflow days
//!   ├─ classify()                   (marker.rs)
//!   └─ pad first/last week
//! GlyphSet::cell_glyph()            (glyph.rs)
//! ```

pub mod glyph;
pub mod grid;
pub mod marker;

pub use glyph::{FirstGlyph, GlyphPreset, GlyphSet, MONTH_INITIALS};
pub use grid::{Cell, WeekGrid, YearLabel};
pub use marker::{MarkerKind, classify};
