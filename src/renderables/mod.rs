//! Renderable components.
//!
//! - [`Table`]: Display data in rows and columns with borders
//!
//! # Examples
//!
//! ```rust
//! use termgrid::renderables::Table;
//! use termgrid::r#box::STARS;
//!
//! let table = Table::new(["Name", "Email"])
//!     .with_border(STARS)
//!     .with_row(["Alice", "alice@example.com"])
//!     .with_row(["Bob", "bob@example.com"]);
//!
//! let rendered = table.render_for(80);
//! assert!(rendered.starts_with("*~~~~~*"));
//! ```

pub mod table;

pub use table::{Cell, Column, Row, RowKind, Table, TableLayout};
