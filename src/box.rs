//! Border glyphs for tables.
//!
//! A table border is described by three glyph strings: the vertical border
//! drawn between cells, the horizontal border repeated along separator
//! lines, and the corner placed where they meet. Glyphs may be longer than
//! one character; widths are measured in display units.

use std::borrow::Cow;
use std::fmt;

use crate::cells::cell_len;

/// Border glyph set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderChars {
    /// Drawn before every cell and after the last one.
    pub vertical: Cow<'static, str>,
    /// Repeated along separator lines.
    pub horizontal: Cow<'static, str>,
    /// Drawn at every column boundary of a separator line.
    pub corner: Cow<'static, str>,
}

impl BorderChars {
    /// Create a border set from static glyphs.
    #[must_use]
    pub const fn new(
        vertical: &'static str,
        horizontal: &'static str,
        corner: &'static str,
    ) -> Self {
        Self {
            vertical: Cow::Borrowed(vertical),
            horizontal: Cow::Borrowed(horizontal),
            corner: Cow::Borrowed(corner),
        }
    }

    /// Create a border set from owned glyphs.
    #[must_use]
    pub fn custom(
        vertical: impl Into<String>,
        horizontal: impl Into<String>,
        corner: impl Into<String>,
    ) -> Self {
        Self {
            vertical: Cow::Owned(vertical.into()),
            horizontal: Cow::Owned(horizontal.into()),
            corner: Cow::Owned(corner.into()),
        }
    }

    /// Display width of the vertical glyph.
    #[must_use]
    pub fn vertical_width(&self) -> usize {
        cell_len(&self.vertical)
    }

    /// Display width of the corner glyph.
    #[must_use]
    pub fn corner_width(&self) -> usize {
        cell_len(&self.corner)
    }

    /// Total width taken by vertical borders around `columns` cells.
    #[must_use]
    pub fn frame_width(&self, columns: usize) -> usize {
        self.vertical_width() * (columns + 1)
    }

    /// Whether all glyphs are plain ASCII.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.vertical.is_ascii() && self.horizontal.is_ascii() && self.corner.is_ascii()
    }

    /// Build a separator line (without line terminator) for the given
    /// column widths.
    ///
    /// Each column contributes a corner followed by the horizontal glyph
    /// repeated `vertical_width + width - corner_width` times; a final corner
    /// closes the line.
    #[must_use]
    pub fn build_separator(&self, widths: &[usize]) -> String {
        let vertical_width = self.vertical_width();
        let corner_width = self.corner_width();

        let mut result = String::new();
        for &width in widths {
            result.push_str(&self.corner);
            let count = (vertical_width + width).saturating_sub(corner_width);
            result.push_str(&self.horizontal.repeat(count));
        }
        result.push_str(&self.corner);
        result
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        ASCII
    }
}

impl fmt::Display for BorderChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sample 2x1 grid
        let widths = [3, 3];
        writeln!(f, "{}", self.build_separator(&widths))?;
        writeln!(f, "{0}   {0}   {0}", self.vertical)?;
        write!(f, "{}", self.build_separator(&widths))
    }
}

/// Classic `+`, `-`, `|` borders.
pub const ASCII: BorderChars = BorderChars::new("|", "-", "+");

/// Heavier ASCII borders using `#` and `=`.
pub const ASCII_DOUBLE: BorderChars = BorderChars::new("#", "=", "#");

/// Starred borders.
pub const STARS: BorderChars = BorderChars::new("!", "~", "*");

/// Only horizontal rules; verticals and corners are blank.
pub const MINIMAL: BorderChars = BorderChars::new(" ", "-", " ");

/// Light Unicode box drawing lines.
pub const LIGHT: BorderChars = BorderChars::new("\u{2502}", "\u{2500}", "\u{253C}");

/// Heavy Unicode box drawing lines.
pub const HEAVY: BorderChars = BorderChars::new("\u{2503}", "\u{2501}", "\u{254B}");

/// Look up a border preset by name (case insensitive).
#[must_use]
pub fn get_border(name: &str) -> Option<BorderChars> {
    match name.to_lowercase().as_str() {
        "ascii" => Some(ASCII),
        "ascii_double" | "ascii-double" => Some(ASCII_DOUBLE),
        "stars" => Some(STARS),
        "minimal" => Some(MINIMAL),
        "light" => Some(LIGHT),
        "heavy" => Some(HEAVY),
        _ => None,
    }
}
