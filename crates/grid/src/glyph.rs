//! Marker glyphs and the built-in glyph palettes.

use crate::grid::Cell;
use crate::marker::MarkerKind;

/// Month initials (index 0 = January).
pub const MONTH_INITIALS: [char; 12] = ['J', 'F', 'M', 'A', 'M', 'J', 'J', 'A', 'S', 'O', 'N', 'D'];

/// Glyph used for the 1st of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstGlyph {
    /// The same character for every month.
    Fixed(char),
    /// The month's initial letter, from [`MONTH_INITIALS`].
    MonthInitial,
}

/// Named glyph palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphPreset {
    /// Month initials for the 1st, `*` marked, `.` regular.
    #[default]
    Letters,
    /// `█` first, `▓` marked, `░` regular.
    Blocks,
    /// `●` first, `○` marked, `◐` regular.
    Geometric,
    /// `●` first, `◎` marked, `•` regular.
    Dots,
    /// `⚀` first, `⚁` marked, `⚂` regular.
    Dice,
    /// `▣` first, `▤` marked, `▥` regular.
    Squares,
    /// `◉` first, `◎` marked, `○` regular.
    Circles,
    /// `·` for every day.
    Minimal,
}

impl GlyphPreset {
    /// All presets, in display order.
    pub const ALL: [GlyphPreset; 8] = [
        GlyphPreset::Letters,
        GlyphPreset::Blocks,
        GlyphPreset::Geometric,
        GlyphPreset::Dots,
        GlyphPreset::Dice,
        GlyphPreset::Squares,
        GlyphPreset::Circles,
        GlyphPreset::Minimal,
    ];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            GlyphPreset::Letters => "letters",
            GlyphPreset::Blocks => "blocks",
            GlyphPreset::Geometric => "geometric",
            GlyphPreset::Dots => "dots",
            GlyphPreset::Dice => "dice",
            GlyphPreset::Squares => "squares",
            GlyphPreset::Circles => "circles",
            GlyphPreset::Minimal => "minimal",
        }
    }
}

/// The characters drawn for each [`MarkerKind`].
///
/// # Example
///
/// ```
/// use smallcal_grid::{GlyphPreset, GlyphSet, MarkerKind};
///
/// let glyphs = GlyphSet::preset(GlyphPreset::Blocks).with_marked('X');
/// assert_eq!(glyphs.glyph(MarkerKind::Marked, 7), 'X');
/// assert_eq!(glyphs.glyph(MarkerKind::FirstOfMonth, 7), '█');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    first_of_month: FirstGlyph,
    marked: char,
    regular: char,
    blank: char,
}

impl GlyphSet {
    /// Builds the glyph set for a named preset.
    pub fn preset(preset: GlyphPreset) -> Self {
        let (first_of_month, marked, regular) = match preset {
            GlyphPreset::Letters => (FirstGlyph::MonthInitial, '*', '.'),
            GlyphPreset::Blocks => (FirstGlyph::Fixed('█'), '▓', '░'),
            GlyphPreset::Geometric => (FirstGlyph::Fixed('●'), '○', '◐'),
            GlyphPreset::Dots => (FirstGlyph::Fixed('●'), '◎', '•'),
            GlyphPreset::Dice => (FirstGlyph::Fixed('⚀'), '⚁', '⚂'),
            GlyphPreset::Squares => (FirstGlyph::Fixed('▣'), '▤', '▥'),
            GlyphPreset::Circles => (FirstGlyph::Fixed('◉'), '◎', '○'),
            GlyphPreset::Minimal => (FirstGlyph::Fixed('·'), '·', '·'),
        };
        Self {
            first_of_month,
            marked,
            regular,
            blank: ' ',
        }
    }

    /// Overrides the first-of-month glyph.
    pub fn with_first_of_month(mut self, first: FirstGlyph) -> Self {
        self.first_of_month = first;
        self
    }

    /// Overrides the marked-day glyph.
    pub fn with_marked(mut self, marked: char) -> Self {
        self.marked = marked;
        self
    }

    /// Overrides the regular-day glyph.
    pub fn with_regular(mut self, regular: char) -> Self {
        self.regular = regular;
        self
    }

    /// The first-of-month glyph rule.
    pub fn first_of_month(&self) -> FirstGlyph {
        self.first_of_month
    }

    /// The marked-day glyph.
    pub fn marked(&self) -> char {
        self.marked
    }

    /// The regular-day glyph.
    pub fn regular(&self) -> char {
        self.regular
    }

    /// The padding glyph (always a space).
    pub fn blank(&self) -> char {
        self.blank
    }

    /// Glyph for a marker in `month` (1..=12; only consulted for
    /// [`FirstGlyph::MonthInitial`]).
    pub fn glyph(&self, kind: MarkerKind, month: u8) -> char {
        match kind {
            MarkerKind::Marked => self.marked,
            MarkerKind::Regular => self.regular,
            MarkerKind::Blank => self.blank,
            MarkerKind::FirstOfMonth => match self.first_of_month {
                FirstGlyph::Fixed(c) => c,
                FirstGlyph::MonthInitial => usize::from(month)
                    .checked_sub(1)
                    .and_then(|i| MONTH_INITIALS.get(i))
                    .copied()
                    .unwrap_or(self.regular),
            },
        }
    }

    /// Glyph for a grid cell.
    pub fn cell_glyph(&self, cell: &Cell) -> char {
        let month = cell.day().map_or(0, |d| d.month());
        self.glyph(cell.kind(), month)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::preset(GlyphPreset::default())
    }
}
