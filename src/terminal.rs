//! Terminal width detection.
//!
//! The table engine never queries the terminal directly. It asks a
//! [`WidthSource`] for the current width once per render; a width of zero
//! means "unconstrained".

use std::fmt;
use std::sync::Arc;

/// Environment variable that overrides the detected terminal width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Get the terminal size (width, height) in cells.
///
/// Returns `None` if the terminal size cannot be determined.
#[must_use]
pub fn get_terminal_size() -> Option<(usize, usize)> {
    crossterm::terminal::size()
        .ok()
        .map(|(w, h)| (w as usize, h as usize))
}

/// Get the terminal width in cells.
///
/// Honors a positive integer `COLUMNS`, then asks the terminal. Returns 0
/// when neither is available.
#[must_use]
pub fn get_terminal_width() -> usize {
    if let Some(width) = columns_override(std::env::var(COLUMNS_ENV).ok().as_deref()) {
        return width;
    }
    get_terminal_size().map_or(0, |(w, _)| w)
}

fn columns_override(columns: Option<&str>) -> Option<usize> {
    let columns = columns?.trim();
    match columns.parse::<usize>() {
        Ok(width) if width > 0 => Some(width),
        _ => {
            if !columns.is_empty() {
                log::debug!("ignoring {COLUMNS_ENV}={columns:?}");
            }
            None
        }
    }
}

/// Where a table gets its terminal width from.
#[derive(Clone, Default)]
pub enum WidthSource {
    /// Query the terminal on every render (see [`get_terminal_width`]).
    #[default]
    Terminal,
    /// Always use this width. Zero means unconstrained.
    Fixed(usize),
    /// Never constrain the table.
    Unconstrained,
    /// Ask an injected function for the width.
    Custom(Arc<dyn Fn() -> usize + Send + Sync>),
}

impl WidthSource {
    /// Wrap a function as a width source.
    #[must_use]
    pub fn custom(probe: impl Fn() -> usize + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(probe))
    }

    /// Current width in columns; 0 when unconstrained or unknown.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Terminal => get_terminal_width(),
            Self::Fixed(width) => *width,
            Self::Unconstrained => 0,
            Self::Custom(probe) => probe(),
        }
    }
}

impl fmt::Debug for WidthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => write!(f, "Terminal"),
            Self::Fixed(width) => f.debug_tuple("Fixed").field(width).finish(),
            Self::Unconstrained => write!(f, "Unconstrained"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl From<usize> for WidthSource {
    fn from(width: usize) -> Self {
        Self::Fixed(width)
    }
}
