//! Weekday-row grid construction.

use tracing::debug;

use smallcal_calendar::{CalendarDay, MonthDays, NaiveDate, Weekday, YearSpan};

use crate::marker::{MarkerKind, classify};

/// One cell of a [`WeekGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    kind: MarkerKind,
    day: Option<CalendarDay>,
}

impl Cell {
    /// A padding cell.
    pub fn blank() -> Self {
        Self {
            kind: MarkerKind::Blank,
            day: None,
        }
    }

    /// A real day, classified against `mark`.
    pub fn from_day(day: CalendarDay, mark: Option<NaiveDate>) -> Self {
        Self {
            kind: classify(day, mark),
            day: Some(day),
        }
    }

    /// The cell's marker.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// The day shown in this cell, `None` for padding.
    pub fn day(&self) -> Option<CalendarDay> {
        self.day
    }

    /// Returns `true` for padding cells.
    pub fn is_blank(&self) -> bool {
        self.kind == MarkerKind::Blank
    }
}

/// Position of a year's January 1st in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearLabel {
    /// The year.
    pub year: i32,
    /// Week-column holding January 1st.
    pub column: usize,
}

/// Seven weekday rows covering every day of a contiguous run of years.
///
/// Row `i` holds the days falling `i` days after the first weekday. Each
/// column is one week. The first and last columns are padded with blank
/// cells, so all rows always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    first_weekday: Weekday,
    rows: [Vec<Cell>; 7],
    columns: usize,
    year_labels: Vec<YearLabel>,
}

impl WeekGrid {
    /// Builds one continuous grid for every year from `span.first()` to
    /// `span.last()`.
    ///
    /// Months are walked in order and each month's overflow days are skipped,
    /// since they are emitted under their own month. A new week-column opens
    /// each time a day lands on the first-weekday row.
    ///
    /// `span` must be contiguous; split a span with gaps with
    /// [`YearSpan::each_year`] and build one grid per year.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `span` has gaps.
    #[tracing::instrument(skip_all, fields(first = span.first(), last = span.last()))]
    pub fn build(span: &YearSpan, first_weekday: Weekday, mark: Option<NaiveDate>) -> Self {
        debug_assert!(
            span.is_contiguous(),
            "WeekGrid::build needs a contiguous span, got {:?}",
            span.years()
        );
        let mut rows: [Vec<Cell>; 7] = Default::default();
        let mut columns = 0usize;
        let mut year_labels = Vec::with_capacity(span.len());

        for year in span.first()..=span.last() {
            for month in 1..=12u8 {
                let days = MonthDays::new(year, month, first_weekday)
                    .expect("YearSpan years and months 1..=12 are always representable");
                for day in days.in_month() {
                    let row = day.weekday_offset(first_weekday);
                    if columns == 0 {
                        for padded in rows.iter_mut().take(row) {
                            padded.push(Cell::blank());
                        }
                        columns = 1;
                    } else if row == 0 {
                        columns += 1;
                    }
                    if month == 1 && day.is_first_of_month() {
                        year_labels.push(YearLabel {
                            year,
                            column: columns - 1,
                        });
                    }
                    rows[row].push(Cell::from_day(day, mark));
                }
            }
        }

        for row in &mut rows {
            row.resize(columns, Cell::blank());
        }

        debug!(columns, "week grid built");
        Self {
            first_weekday,
            rows,
            columns,
            year_labels,
        }
    }

    /// The weekday of row 0.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Number of week-columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All seven rows.
    pub fn rows(&self) -> &[Vec<Cell>; 7] {
        &self.rows
    }

    /// One weekday row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 7`.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// The cell at `(row, column)`, if inside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// The seven cells of one week-column, in row order.
    pub fn week(&self, column: usize) -> Option<[Cell; 7]> {
        if column >= self.columns {
            return None;
        }
        Some(std::array::from_fn(|row| self.rows[row][column]))
    }

    /// Where each year's January 1st falls.
    pub fn year_labels(&self) -> &[YearLabel] {
        &self.year_labels
    }

    /// `(row, column)` of the cell showing `date`, if the grid contains it.
    pub fn position(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, cells)| {
            cells
                .iter()
                .position(|c| c.day().is_some_and(|d| d.date() == date))
                .map(|c| (r, c))
        })
    }

    /// Number of non-blank cells.
    pub fn day_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| !c.is_blank())
            .count()
    }
}
