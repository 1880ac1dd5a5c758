//! Column styles: alignment and padding.
//!
//! Each [`Column`](crate::renderables::table::Column) carries two independent
//! [`ColumnStyle`] values, one for the header row and one for body rows.
//! Styles are plain `Copy` values, so customizing one column never leaks
//! into another.
//!
//! Styles can be built with the builder methods or parsed from a compact
//! definition string:
//!
//! ```
//! use termgrid::style::{Align, ColumnStyle, Padding, VerticalAlign};
//!
//! let style = ColumnStyle::parse("right bottom pad=2,1,1,0").unwrap();
//! assert_eq!(style.align, Align::Right);
//! assert_eq!(style.vertical, VerticalAlign::Bottom);
//! assert_eq!(style.padding, Padding::new(2, 1, 1, 0));
//! ```

use std::fmt;
use std::str::FromStr;

/// Horizontal alignment of cell content within the interior width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Content first, spaces after.
    #[default]
    Left,
    /// Spaces split around content; the odd space goes to the right.
    Center,
    /// Spaces first, content after.
    Right,
}

/// Vertical alignment of cell content within the row's line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    /// Align to top of cell.
    #[default]
    Top,
    /// Align to middle of cell.
    Middle,
    /// Align to bottom of cell.
    Bottom,
}

/// CSS-style padding dimensions, in display units and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    /// Blank lines above the content.
    pub top: usize,
    /// Spaces after the content.
    pub right: usize,
    /// Blank lines below the content.
    pub bottom: usize,
    /// Spaces before the content.
    pub left: usize,
}

impl Padding {
    /// Create padding with individual values for each side.
    #[must_use]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding with all sides equal.
    #[must_use]
    pub const fn all(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// Create padding with separate vertical and horizontal values.
    #[must_use]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Create zero padding.
    #[must_use]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Total horizontal padding (left + right).
    #[must_use]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom).
    #[must_use]
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<usize> for Padding {
    fn from(n: usize) -> Self {
        Self::all(n)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Padding {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// Alignment and padding applied to every cell of a column in one row kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnStyle {
    /// Horizontal alignment.
    pub align: Align,
    /// Vertical alignment.
    pub vertical: VerticalAlign,
    /// Four-sided padding.
    pub padding: Padding,
}

impl ColumnStyle {
    /// Create a left/top aligned style with no padding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            align: Align::Left,
            vertical: VerticalAlign::Top,
            padding: Padding::zero(),
        }
    }

    /// Default style for header cells: centered, vertically middle.
    #[must_use]
    pub const fn header() -> Self {
        Self {
            align: Align::Center,
            vertical: VerticalAlign::Middle,
            padding: Padding::zero(),
        }
    }

    /// Default style for body cells: left, top.
    #[must_use]
    pub const fn body() -> Self {
        Self::new()
    }

    /// Set horizontal alignment.
    #[must_use]
    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set vertical alignment.
    #[must_use]
    pub const fn vertical(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }

    /// Set all four padding sides.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set left and right padding.
    #[must_use]
    pub const fn padding_x(mut self, left: usize, right: usize) -> Self {
        self.padding.left = left;
        self.padding.right = right;
        self
    }

    /// Set top and bottom padding.
    #[must_use]
    pub const fn padding_y(mut self, top: usize, bottom: usize) -> Self {
        self.padding.top = top;
        self.padding.bottom = bottom;
        self
    }

    /// Width left for content once horizontal padding is taken from `width`.
    #[must_use]
    pub const fn interior_width(&self, width: usize) -> usize {
        width.saturating_sub(self.padding.horizontal())
    }

    /// Parse a style definition.
    ///
    /// The definition is a whitespace-separated list of tokens, matched
    /// case-insensitively:
    ///
    /// - `left`, `center` (or `centre`), `right`
    /// - `top`, `middle`, `bottom`
    /// - `pad=N`, `pad=V,H` or `pad=T,R,B,L` (`padding=` is accepted too)
    ///
    /// Unspecified fields keep the [`ColumnStyle::new`] defaults; later
    /// tokens override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`StyleParseError`] for an empty definition, an unknown token,
    /// or a malformed padding value.
    pub fn parse(definition: &str) -> Result<Self, StyleParseError> {
        let normalized = definition.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(StyleParseError::Empty);
        }

        let mut style = Self::new();
        for word in normalized.split_whitespace() {
            if let Some(value) = word
                .strip_prefix("pad=")
                .or_else(|| word.strip_prefix("padding="))
            {
                style.padding = value.parse()?;
            } else if let Ok(align) = word.parse::<Align>() {
                style.align = align;
            } else if let Ok(vertical) = word.parse::<VerticalAlign>() {
                style.vertical = vertical;
            } else {
                return Err(StyleParseError::UnknownToken(word.to_string()));
            }
        }
        Ok(style)
    }
}

/// Error type for style parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    /// The definition contained no tokens.
    Empty,
    /// A token was not an alignment keyword or padding assignment.
    UnknownToken(String),
    /// A padding value was not 1, 2 or 4 comma-separated integers.
    InvalidPadding(String),
}

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty style definition"),
            Self::UnknownToken(s) => write!(f, "Unknown style token: {s}"),
            Self::InvalidPadding(s) => write!(f, "Invalid padding: {s}"),
        }
    }
}

impl std::error::Error for StyleParseError {}

impl FromStr for Align {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(StyleParseError::UnknownToken(other.to_string())),
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(StyleParseError::UnknownToken(other.to_string())),
        }
    }
}

impl FromStr for Padding {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StyleParseError::InvalidPadding(s.to_string()))?;

        match values.as_slice() {
            &[n] => Ok(Self::all(n)),
            &[vertical, horizontal] => Ok(Self::symmetric(vertical, horizontal)),
            &[top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(StyleParseError::InvalidPadding(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ColumnStyle {
    type Error = StyleParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let header = ColumnStyle::header();
        assert_eq!(header.align, Align::Center);
        assert_eq!(header.vertical, VerticalAlign::Middle);
        assert_eq!(header.padding, Padding::zero());

        let body = ColumnStyle::body();
        assert_eq!(body.align, Align::Left);
        assert_eq!(body.vertical, VerticalAlign::Top);
        assert_eq!(body, ColumnStyle::default());
    }

    #[test]
    fn test_padding_constructors() {
        assert_eq!(Padding::all(2), Padding::new(2, 2, 2, 2));
        assert_eq!(Padding::symmetric(1, 3), Padding::new(1, 3, 1, 3));
        assert_eq!(Padding::from((1, 2, 3, 4)).left, 4);
        assert_eq!(Padding::new(1, 2, 3, 4).horizontal(), 6);
        assert_eq!(Padding::new(1, 2, 3, 4).vertical(), 4);
    }

    #[test]
    fn test_builder_chain() {
        let style = ColumnStyle::new()
            .align(Align::Right)
            .vertical(VerticalAlign::Bottom)
            .padding_x(2, 1)
            .padding_y(1, 0);
        assert_eq!(style.padding, Padding::new(1, 1, 0, 2));
        assert_eq!(style.interior_width(10), 7);
        assert_eq!(style.interior_width(2), 0);
    }

    #[test]
    fn test_parse_keywords() {
        let style = ColumnStyle::parse("Center MIDDLE").unwrap();
        assert_eq!(style.align, Align::Center);
        assert_eq!(style.vertical, VerticalAlign::Middle);
    }

    #[test]
    fn test_parse_padding_forms() {
        assert_eq!(ColumnStyle::parse("pad=1").unwrap().padding, Padding::all(1));
        assert_eq!(
            ColumnStyle::parse("padding=0,2").unwrap().padding,
            Padding::symmetric(0, 2)
        );
        assert_eq!(
            ColumnStyle::parse("left pad=2,1,1,0").unwrap().padding,
            Padding::new(2, 1, 1, 0)
        );
    }

    #[test]
    fn test_parse_later_tokens_win() {
        let style = ColumnStyle::parse("left right").unwrap();
        assert_eq!(style.align, Align::Right);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ColumnStyle::parse("  "), Err(StyleParseError::Empty));
        assert_eq!(
            ColumnStyle::parse("left sideways"),
            Err(StyleParseError::UnknownToken("sideways".to_string()))
        );
        assert_eq!(
            ColumnStyle::parse("pad=1,2,3"),
            Err(StyleParseError::InvalidPadding("1,2,3".to_string()))
        );
        assert!(matches!(
            ColumnStyle::parse("pad=x"),
            Err(StyleParseError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = StyleParseError::UnknownToken("wat".to_string());
        assert_eq!(err.to_string(), "Unknown style token: wat");
    }

    #[test]
    fn test_try_from() {
        let style = ColumnStyle::try_from("bottom").unwrap();
        assert_eq!(style.vertical, VerticalAlign::Bottom);
    }
}
