//! Condensed yearly views.

use tracing::debug;

use smallcal_calendar::{NaiveDate, Weekday, YearSpan, week_order};
use smallcal_grid::{GlyphSet, WeekGrid};

use crate::names::weekday_initial;

/// Space between side-by-side year blocks.
const BLOCK_GAP: &str = "  ";

/// Width of the year label column in the vertical view.
const LABEL_WIDTH: usize = 4;

/// Direction of the week axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One line per weekday, one character per week.
    #[default]
    Horizontal,
    /// One line per week, one character column per weekday.
    Vertical,
}

/// Options for [`render_years`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOptions {
    first_weekday: Weekday,
    orientation: Orientation,
    glyphs: GlyphSet,
    separate: bool,
    mark: Option<NaiveDate>,
}

impl YearOptions {
    /// Sunday-first, horizontal, default glyphs, nothing marked.
    pub fn new() -> Self {
        Self {
            first_weekday: Weekday::Sun,
            orientation: Orientation::Horizontal,
            glyphs: GlyphSet::default(),
            separate: false,
            mark: None,
        }
    }

    /// Sets the weekday of the first row (horizontal) or column (vertical).
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the glyph set.
    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Renders every year as its own block even when the span is contiguous.
    pub fn with_separate(mut self, separate: bool) -> Self {
        self.separate = separate;
        self
    }

    /// Sets the date to highlight.
    pub fn with_mark(mut self, mark: Option<NaiveDate>) -> Self {
        self.mark = mark;
        self
    }

    /// The weekday of the first row or column.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The glyph set.
    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Whether contiguous spans are split into per-year blocks.
    pub fn separate(&self) -> bool {
        self.separate
    }

    /// The highlighted date.
    pub fn mark(&self) -> Option<NaiveDate> {
        self.mark
    }
}

impl Default for YearOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the grids for `span`: one continuous grid for a contiguous span,
/// otherwise (or when `separate` is set) one grid per year.
pub fn build_grids(span: &YearSpan, options: &YearOptions) -> Vec<WeekGrid> {
    if span.is_contiguous() && !options.separate {
        vec![WeekGrid::build(span, options.first_weekday, options.mark)]
    } else {
        span.each_year()
            .map(|year| WeekGrid::build(&year, options.first_weekday, options.mark))
            .collect()
    }
}

/// Renders `span` as a condensed yearly view.
///
/// ```
/// use smallcal_calendar::{YearBounds, YearSpan};
/// use smallcal_render::{YearOptions, render_years};
///
/// let span = YearSpan::single(2023, YearBounds::default()).unwrap();
/// let lines = render_years(&span, &YearOptions::default());
/// assert_eq!(lines[0], "  2023");
/// assert_eq!(lines.len(), 8);
/// assert!(lines[1].starts_with("S J"));
/// ```
#[tracing::instrument(skip_all, fields(years = span.len(), orientation = ?options.orientation))]
pub fn render_years(span: &YearSpan, options: &YearOptions) -> Vec<String> {
    let grids = build_grids(span, options);
    debug!(blocks = grids.len(), "rendering year blocks");
    let lines = match options.orientation {
        Orientation::Horizontal => horizontal(&grids, options),
        Orientation::Vertical => vertical(&grids, options),
    };
    lines
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn pad_to(line: &mut String, width: usize) {
    let len = char_len(line);
    if len < width {
        line.extend(std::iter::repeat_n(' ', width - len));
    }
}

/// Year numbers placed over the columns holding each January 1st.
fn label_line(grid: &WeekGrid) -> String {
    let mut line = String::new();
    for label in grid.year_labels() {
        let len = char_len(&line);
        let at = if len == 0 { label.column } else { label.column.max(len + 1) };
        pad_to(&mut line, at);
        line.push_str(&label.year.to_string());
    }
    line
}

/// Lines of one horizontal block: label line then seven weekday rows.
fn horizontal_block(grid: &WeekGrid, glyphs: &GlyphSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(label_line(grid));
    for row in grid.rows() {
        lines.push(row.iter().map(|c| glyphs.cell_glyph(c)).collect());
    }
    lines
}

fn horizontal(grids: &[WeekGrid], options: &YearOptions) -> Vec<String> {
    let blocks: Vec<Vec<String>> = grids
        .iter()
        .map(|g| horizontal_block(g, &options.glyphs))
        .collect();

    let mut lines: Vec<String> = std::iter::once("  ".to_string())
        .chain(
            week_order(options.first_weekday)
                .into_iter()
                .map(|wd| format!("{} ", weekday_initial(wd))),
        )
        .collect();
    join_blocks(&mut lines, &blocks);
    lines
}

/// Lines of one vertical block: weekday initials then one line per week.
fn vertical_block(grid: &WeekGrid, glyphs: &GlyphSet) -> Vec<String> {
    let initials: Vec<String> = week_order(grid.first_weekday())
        .into_iter()
        .map(|wd| weekday_initial(wd).to_string())
        .collect();
    let mut lines = Vec::with_capacity(grid.columns() + 1);
    lines.push(format!("{:LABEL_WIDTH$} {}", "", initials.join(" ")));

    for column in 0..grid.columns() {
        let label = grid
            .year_labels()
            .iter()
            .find(|l| l.column == column)
            .map(|l| l.year.to_string())
            .unwrap_or_default();
        let glyph_line: Vec<String> = grid
            .rows()
            .iter()
            .map(|row| glyphs.cell_glyph(&row[column]).to_string())
            .collect();
        lines.push(format!("{label:>LABEL_WIDTH$} {}", glyph_line.join(" ")));
    }
    lines
}

fn vertical(grids: &[WeekGrid], options: &YearOptions) -> Vec<String> {
    let blocks: Vec<Vec<String>> = grids
        .iter()
        .map(|g| vertical_block(g, &options.glyphs))
        .collect();
    let mut lines = Vec::new();
    join_blocks(&mut lines, &blocks);
    lines
}

/// Appends `blocks` side by side onto `lines`, padding every block to its
/// widest line and every column of blocks to the tallest block.
fn join_blocks(lines: &mut Vec<String>, blocks: &[Vec<String>]) {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0).max(lines.len());
    lines.resize(height, String::new());
    let prefix = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
    for line in lines.iter_mut() {
        pad_to(line, prefix);
    }

    for (i, block) in blocks.iter().enumerate() {
        let width = block.iter().map(|l| char_len(l)).max().unwrap_or(0);
        for (row, line) in lines.iter_mut().enumerate() {
            if i > 0 {
                line.push_str(BLOCK_GAP);
            }
            let start = char_len(line);
            if let Some(part) = block.get(row) {
                line.push_str(part);
            }
            pad_to(line, start + width);
        }
    }
}
