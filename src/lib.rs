//! # termgrid
//!
//! Fixed-width, border-drawn text tables for the terminal.
//!
//! A table is built from column names and rows of values, then rendered to a
//! plain `String`. When the table is wider than the terminal, its columns are
//! shrunk proportionally and overflowing cells are word-wrapped onto several
//! lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use termgrid::prelude::*;
//!
//! let mut table = Table::new(["id", "name"]);
//! table.add_row(["1", "Alice"]);
//! table.add_row(["2", "Bob"]);
//!
//! print!("{}", table.render_for(80));
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: Columns, a header row and body rows
//! - **ColumnStyle**: Horizontal/vertical alignment and padding, per column
//!   and separately for header and body cells
//! - **BorderChars**: The vertical, horizontal and corner glyphs
//! - **WidthSource**: Where the terminal width comes from
//!
//! Width is measured in Unicode code points.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod r#box;
pub mod cells;
pub mod logging;
pub mod measure;
pub mod renderables;
pub mod style;
pub mod sync;
pub mod terminal;
pub mod text;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::r#box::BorderChars;
    pub use crate::renderables::{Cell, Column, Row, RowKind, Table, TableLayout};
    pub use crate::style::{Align, ColumnStyle, Padding, StyleParseError, VerticalAlign};
    pub use crate::terminal::WidthSource;
}

// Re-export key types at crate root
pub use r#box::BorderChars;
pub use renderables::{Cell, Column, Row, RowKind, Table, TableLayout};
pub use style::{Align, ColumnStyle, Padding, StyleParseError, VerticalAlign};
pub use terminal::WidthSource;
