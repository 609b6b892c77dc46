//! Box-drawing border styles for the monthly table.

/// Named border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// `+`, `-` and `|` only.
    Ascii,
    /// `┌─┬─┐` single lines.
    #[default]
    Single,
    /// `╔═╦═╗` double lines.
    Double,
    /// `╭─┬─╮` single lines with rounded corners.
    Rounded,
    /// `┏━┳━┓` heavy lines.
    Thick,
}

impl BorderStyle {
    /// All styles, in display order.
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Ascii,
        BorderStyle::Single,
        BorderStyle::Double,
        BorderStyle::Rounded,
        BorderStyle::Thick,
    ];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Ascii => "ascii",
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
            BorderStyle::Thick => "thick",
        }
    }

    /// The characters that make up this style.
    pub fn chars(self) -> BoxChars {
        match self {
            BorderStyle::Ascii => BoxChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            BorderStyle::Single => BoxChars {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
            BorderStyle::Double => BoxChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Rounded => BoxChars {
                horizontal: '─',
                vertical: '│',
                top: ['╭', '┬', '╮'],
                middle: ['├', '┼', '┤'],
                bottom: ['╰', '┴', '╯'],
            },
            BorderStyle::Thick => BoxChars {
                horizontal: '━',
                vertical: '┃',
                top: ['┏', '┳', '┓'],
                middle: ['┣', '╋', '┫'],
                bottom: ['┗', '┻', '┛'],
            },
        }
    }
}

/// The glyphs of one border style.
///
/// `top`, `middle` and `bottom` hold the `[left, junction, right]` characters
/// of the corresponding horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    /// Horizontal line.
    pub horizontal: char,
    /// Vertical line.
    pub vertical: char,
    /// Top rule ends and tee.
    pub top: [char; 3],
    /// Inner rule ends and cross.
    pub middle: [char; 3],
    /// Bottom rule ends and tee.
    pub bottom: [char; 3],
}

impl BoxChars {
    /// A horizontal rule across `cells` cells of `width` characters.
    pub fn rule(&self, [left, junction, right]: [char; 3], cells: usize, width: usize) -> String {
        let segment: String = std::iter::repeat_n(self.horizontal, width).collect();
        let mut line = String::new();
        line.push(left);
        for i in 0..cells {
            if i > 0 {
                line.push(junction);
            }
            line.push_str(&segment);
        }
        line.push(right);
        line
    }

    /// A content row: `cells` joined and framed by vertical lines.
    pub fn row<'a>(&self, cells: impl IntoIterator<Item = &'a str>) -> String {
        let mut line = String::new();
        line.push(self.vertical);
        for cell in cells {
            line.push_str(cell);
            line.push(self.vertical);
        }
        line
    }
}
