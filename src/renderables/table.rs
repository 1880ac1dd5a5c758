//! Table - fixed-width, border-drawn text tables.
//!
//! A [`Table`] is built from column names, filled with rows of values and
//! rendered to a `String`. Rendering recomputes the layout from scratch
//! every time:
//!
//! 1. every column grows to its widest padded cell,
//! 2. if the table is wider than the terminal, columns are shrunk and
//!    overflowing cells are word-wrapped onto several lines,
//! 3. every row gets a line height from its tallest cell plus padding,
//! 4. the grid is painted line by line.
//!
//! # Examples
//!
//! ```
//! use termgrid::renderables::table::Table;
//! use termgrid::style::{Align, ColumnStyle};
//!
//! let mut table = Table::new(["id", "name"]);
//! table.add_row([&1 as &dyn std::fmt::Display, &"Alice"]);
//! if let Some(column) = table.column_by_name_mut("name") {
//!     column.body_style = ColumnStyle::new().align(Align::Right);
//! }
//!
//! assert_eq!(
//!     table.render_for(0),
//!     "+--+-----+\n\
//!      |id|name |\n\
//!      +--+-----+\n\
//!      |1 |Alice|\n\
//!      +--+-----+\n"
//! );
//! ```
//!
//! Header cells default to centered text, vertically middle; body cells to
//! left/top. Each column owns its two styles, so changing one column never
//! affects another.
//!
//! # Lossy wrapping
//!
//! When a single word is wider than its column's interior, it is cut to the
//! column width minus one and the rest of the word is dropped. No ellipsis
//! is added.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use crate::cells::{blank, cell_len};
use crate::measure::ColumnWidths;
use crate::r#box::BorderChars;
use crate::style::{ColumnStyle, VerticalAlign};
use crate::terminal::WidthSource;
use crate::text::{self, WrappedLines};

/// A single table cell: display text and its measured width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    /// Create a new cell with the given display text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = cell_len(&text);
        Self { text, width }
    }

    /// Create a cell from any displayable value.
    #[must_use]
    pub fn display(value: &(impl fmt::Display + ?Sized)) -> Self {
        Self::new(value.to_string())
    }

    /// An empty cell.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in code points.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::new(value.as_str())
    }
}

/// Whether a row is the header or a body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The first row, built from the column names.
    Header,
    /// A data row.
    Body,
}

/// A table row. Always holds exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    kind: RowKind,
}

impl Row {
    fn new(cells: Vec<Cell>, kind: RowKind) -> Self {
        Self { cells, kind }
    }

    /// Cells, in column order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at column `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Header or body.
    #[must_use]
    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// Whether this is the header row.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.kind == RowKind::Header
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells (only in a table without columns).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Column definition: its name and the styles for header and body cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    min_width: usize,
    /// Style for the header cell.
    pub header_style: ColumnStyle,
    /// Style for body cells.
    pub body_style: ColumnStyle,
}

impl Column {
    fn new(name: String) -> Self {
        let min_width = cell_len(&name);
        Self {
            name,
            min_width,
            header_style: ColumnStyle::header(),
            body_style: ColumnStyle::body(),
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width the column never measures below: the name's display width.
    #[must_use]
    pub fn min_width(&self) -> usize {
        self.min_width
    }

    /// Style governing cells of the given row kind.
    #[must_use]
    pub fn style_for(&self, kind: RowKind) -> &ColumnStyle {
        match kind {
            RowKind::Header => &self.header_style,
            RowKind::Body => &self.body_style,
        }
    }

    /// Mutable header style.
    pub fn header_style_mut(&mut self) -> &mut ColumnStyle {
        &mut self.header_style
    }

    /// Mutable body style.
    pub fn body_style_mut(&mut self) -> &mut ColumnStyle {
        &mut self.body_style
    }

    /// Replace the header style.
    pub fn set_header_style(&mut self, style: ColumnStyle) {
        self.header_style = style;
    }

    /// Replace the body style.
    pub fn set_body_style(&mut self, style: ColumnStyle) {
        self.body_style = style;
    }

    /// Set the header style (builder pattern).
    #[must_use]
    pub fn with_header_style(mut self, style: ColumnStyle) -> Self {
        self.header_style = style;
        self
    }

    /// Set the body style (builder pattern).
    #[must_use]
    pub fn with_body_style(mut self, style: ColumnStyle) -> Self {
        self.body_style = style;
        self
    }
}

/// Computed geometry of one render: column widths, row heights and the
/// wrapped lines of every cell that had to be wrapped.
///
/// Row indices include the header at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    widths: ColumnWidths,
    heights: Vec<usize>,
    wrapped: Vec<Vec<WrappedLines>>,
    shrunk: bool,
}

impl TableLayout {
    /// Column render widths, in column order.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        self.widths.as_slice()
    }

    /// Render width of column `index`.
    #[must_use]
    pub fn column_width(&self, index: usize) -> Option<usize> {
        self.widths.get(index)
    }

    /// Line heights, header first.
    #[must_use]
    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Line height of row `index` (0 is the header).
    #[must_use]
    pub fn line_height(&self, row: usize) -> Option<usize> {
        self.heights.get(row).copied()
    }

    /// Wrapped lines of a cell; empty when the cell renders as plain text.
    #[must_use]
    pub fn wrapped_lines(&self, row: usize, column: usize) -> &[String] {
        self.wrapped
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(|lines| lines.as_slice())
            .unwrap_or_default()
    }

    /// Whether columns were shrunk to fit the terminal.
    #[must_use]
    pub fn is_shrunk(&self) -> bool {
        self.shrunk
    }

    /// Total rendered width of a line, borders included.
    #[must_use]
    pub fn total_width(&self, border: &BorderChars) -> usize {
        self.widths.full_width(border.frame_width(self.widths.len()))
    }
}

/// A data table with named columns and rows of text.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    columns_by_name: HashMap<String, usize>,
    /// Header first, then body rows in insertion order.
    rows: Vec<Row>,
    border: BorderChars,
    width_source: WidthSource,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl Table {
    /// Create a table with one column per name and a header row.
    ///
    /// Duplicate names all get columns; name lookups resolve to the last one.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column::new(name.into()))
            .collect();
        let columns_by_name = columns
            .iter()
            .enumerate()
            .map(|(index, column)| (column.name.clone(), index))
            .collect();
        let header = columns
            .iter()
            .map(|column| Cell::new(column.name.as_str()))
            .collect();

        Self {
            columns,
            columns_by_name,
            rows: vec![Row::new(header, RowKind::Header)],
            border: BorderChars::default(),
            width_source: WidthSource::default(),
        }
    }

    /// Add a row of displayable values.
    ///
    /// Values beyond the column count are ignored; missing trailing values
    /// become empty cells.
    pub fn add_row<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.add_row_cells(values.into_iter().map(|value| Cell::new(value.to_string())));
    }

    /// Add a row of cells (or anything convertible into cells).
    ///
    /// Same padding/truncation rules as [`Table::add_row`].
    pub fn add_row_cells<T: Into<Cell>>(&mut self, cells: impl IntoIterator<Item = T>) {
        let mut cells = cells.into_iter().map(Into::into);
        let cells: Vec<Cell> = (0..self.columns.len())
            .map(|_| cells.next().unwrap_or_default())
            .collect();
        self.rows.push(Row::new(cells, RowKind::Body));
    }

    /// Add a row of displayable values (builder pattern).
    #[must_use]
    pub fn with_row<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.add_row(values);
        self
    }

    /// Set the border glyphs (builder pattern).
    #[must_use]
    pub fn with_border(mut self, border: BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Set the terminal width source (builder pattern).
    #[must_use]
    pub fn with_width_source(mut self, source: impl Into<WidthSource>) -> Self {
        self.width_source = source.into();
        self
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of body rows (the header is not counted).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// All columns, in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at `index`, or `None` when out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Mutable column at `index`, or `None` when out of range.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Column named `name`, or `None` when unknown.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns_by_name
            .get(name)
            .and_then(|&index| self.columns.get(index))
    }

    /// Mutable column named `name`, or `None` when unknown.
    pub fn column_by_name_mut(&mut self, name: &str) -> Option<&mut Column> {
        let index = *self.columns_by_name.get(name)?;
        self.columns.get_mut(index)
    }

    /// The header row.
    #[must_use]
    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    /// Body rows, in insertion order.
    #[must_use]
    pub fn body_rows(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Border glyphs.
    #[must_use]
    pub fn border(&self) -> &BorderChars {
        &self.border
    }

    /// Mutable border glyphs.
    pub fn border_mut(&mut self) -> &mut BorderChars {
        &mut self.border
    }

    /// Replace the border glyphs.
    pub fn set_border(&mut self, border: BorderChars) {
        self.border = border;
    }

    /// Terminal width source.
    #[must_use]
    pub fn width_source(&self) -> &WidthSource {
        &self.width_source
    }

    /// Replace the terminal width source.
    pub fn set_width_source(&mut self, source: impl Into<WidthSource>) {
        self.width_source = source.into();
    }

    /// Compute the layout for a terminal `terminal_width` columns wide.
    ///
    /// A width of zero means unconstrained: nothing is shrunk or wrapped.
    #[must_use]
    pub fn layout(&self, terminal_width: usize) -> TableLayout {
        let mut widths = ColumnWidths::new(self.columns.iter().map(Column::min_width));
        for row in &self.rows {
            for (index, (cell, column)) in row.cells.iter().zip(&self.columns).enumerate() {
                let style = column.style_for(row.kind);
                widths.widen(index, cell.width + style.padding.horizontal());
            }
        }

        let frame_width = self.border.frame_width(self.columns.len());
        let shrunk = widths.shrink_to_fit(frame_width, terminal_width);

        let mut heights = Vec::with_capacity(self.rows.len());
        let mut wrapped = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut height = 1;
            let mut row_wrapped = Vec::with_capacity(row.cells.len());
            for ((cell, column), &width) in row
                .cells
                .iter()
                .zip(&self.columns)
                .zip(widths.as_slice())
            {
                let style = column.style_for(row.kind);
                let interior = style.interior_width(width);
                let mut lines = WrappedLines::new();
                let content_height = if shrunk && cell.width > interior {
                    let parts = text::wrap(&cell.text, interior, width.saturating_sub(1));
                    let count = parts.len();
                    if count > 1 {
                        lines = parts;
                    }
                    count
                } else {
                    1
                };
                height = height.max(content_height + style.padding.vertical());
                row_wrapped.push(lines);
            }
            heights.push(height);
            wrapped.push(row_wrapped);
        }

        TableLayout {
            widths,
            heights,
            wrapped,
            shrunk,
        }
    }

    /// Render the table, reading the terminal width from the width source.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_for(self.width_source.width())
    }

    /// Render the table for a terminal `terminal_width` columns wide
    /// (zero means unconstrained).
    #[must_use]
    pub fn render_for(&self, terminal_width: usize) -> String {
        let layout = self.layout(terminal_width);
        log::debug!(
            "rendering {} columns x {} rows at terminal width {terminal_width} (shrunk: {})",
            self.columns.len(),
            self.rows.len(),
            layout.shrunk
        );
        self.paint(&layout)
    }

    /// Render and write the table to stdout.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing to stdout.
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    /// Render and write the table to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    fn paint(&self, layout: &TableLayout) -> String {
        let widths = layout.widths();
        let separator = self.border.build_separator(widths);
        let line_estimate = layout.total_width(&self.border) + 1;
        let line_count = layout.heights.iter().sum::<usize>() + self.rows.len() + 1;
        let mut out = String::with_capacity(line_estimate * line_count);

        for ((row, &height), wrapped) in self.rows.iter().zip(&layout.heights).zip(&layout.wrapped)
        {
            out.push_str(&separator);
            out.push('\n');
            for line in 0..height {
                for (((cell, column), &width), parts) in row
                    .cells
                    .iter()
                    .zip(&self.columns)
                    .zip(widths)
                    .zip(wrapped)
                {
                    out.push_str(&self.border.vertical);
                    let painter = CellPainter {
                        style: column.style_for(row.kind),
                        width,
                        height,
                    };
                    painter.paint_line(&mut out, cell, parts, line);
                }
                out.push_str(&self.border.vertical);
                out.push('\n');
            }
        }

        out.push_str(&separator);
        out.push('\n');
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Paints one line of one cell.
struct CellPainter<'a> {
    style: &'a ColumnStyle,
    width: usize,
    height: usize,
}

impl CellPainter<'_> {
    fn paint_line(&self, out: &mut String, cell: &Cell, parts: &[String], line: usize) {
        let padding = self.style.padding;
        let interior = self.style.interior_width(self.width);
        // Only `pad_bottom - 1` trailing lines are blanked. Band lines carry
        // no horizontal padding.
        if line < padding.top || line + padding.bottom > self.height {
            out.push_str(&blank(interior));
            return;
        }

        out.push_str(&blank(padding.left));
        if parts.is_empty() {
            if line == self.text_line() {
                text::pad_into(out, &cell.text, cell.width, interior, self.style.align);
            } else {
                out.push_str(&blank(interior));
            }
        } else {
            let start = self.first_wrapped_line(parts.len());
            match line.checked_sub(start).and_then(|offset| parts.get(offset)) {
                Some(part) => {
                    text::pad_into(out, part, cell_len(part), interior, self.style.align);
                }
                None => out.push_str(&blank(interior)),
            }
        }
        out.push_str(&blank(padding.right));
    }

    /// Line index holding an unwrapped cell's text.
    fn text_line(&self) -> usize {
        let padding = self.style.padding;
        match self.style.vertical {
            VerticalAlign::Top => padding.top,
            VerticalAlign::Middle => {
                self.height.saturating_sub(padding.vertical()) / 2 + padding.top
            }
            VerticalAlign::Bottom => self.height.saturating_sub(1 + padding.bottom),
        }
    }

    /// Line index of the first wrapped line.
    fn first_wrapped_line(&self, count: usize) -> usize {
        let padding = self.style.padding;
        match self.style.vertical {
            VerticalAlign::Top => padding.top,
            VerticalAlign::Middle => self.height.saturating_sub(count) / 2 + padding.top,
            VerticalAlign::Bottom => self.height.saturating_sub(count),
        }
    }
}
