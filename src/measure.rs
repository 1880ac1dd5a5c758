//! Column width measurement and terminal fitting.
//!
//! Layout happens in two width passes. [`ColumnWidths::widen`] folds the
//! padded width of every cell into its column (the natural width), then
//! [`ColumnWidths::shrink_to_fit`] redistributes any overflow when the table
//! is wider than the terminal.

/// Extra display units removed on top of the exact overflow.
pub const SAFETY_MARGIN: usize = 5;

/// Render widths of a table's columns, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    /// Start from each column's minimum width.
    #[must_use]
    pub fn new(minimums: impl IntoIterator<Item = usize>) -> Self {
        Self {
            widths: minimums.into_iter().collect(),
        }
    }

    /// Grow column `index` to at least `width`. Widths never shrink here.
    pub fn widen(&mut self, index: usize, width: usize) {
        if let Some(current) = self.widths.get_mut(index) {
            *current = (*current).max(width);
        }
    }

    /// Width of column `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// All widths, in column order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Total table width once `frame_width` units of vertical border are added.
    #[must_use]
    pub fn full_width(&self, frame_width: usize) -> usize {
        self.total() + frame_width
    }

    /// Shrink columns so the table fits in `terminal_width`.
    ///
    /// Returns `false` (leaving widths untouched) when the terminal width is
    /// zero or the table already fits.
    ///
    /// The excess (overflow plus [`SAFETY_MARGIN`]) is handed out in a single
    /// greedy pass in column order. A running percentage of total width is
    /// accumulated; each column wider than the mean takes the cumulative share
    /// of the excess still unassigned, truncated toward zero. Whatever is left
    /// comes off the widest column. The result depends on column order and can
    /// miss the exact terminal width by a few units, but it is deterministic.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn shrink_to_fit(&mut self, frame_width: usize, terminal_width: usize) -> bool {
        let total = self.total();
        let full = total + frame_width;
        if terminal_width == 0 || full <= terminal_width || self.widths.is_empty() {
            return false;
        }

        log::debug!(
            "table is {full} wide, terminal is {terminal_width}; shrinking {} columns",
            self.widths.len()
        );

        let mut excess = (full - terminal_width) as f64 + SAFETY_MARGIN as f64;
        let max_excess = excess;
        let total_f = total as f64;
        let mean = total_f / self.widths.len() as f64;

        let mut widest = 0;
        let mut widest_index = 0;
        let mut cumulative_rate = 0.0_f64;

        for (index, width) in self.widths.iter_mut().enumerate() {
            let rate = (100.0 * *width as f64) / total_f;
            cumulative_rate += rate;
            if *width as f64 + max_excess - excess > mean {
                let deduction = excess * cumulative_rate / 100.0;
                let cut = deduction.floor() as usize;
                log::trace!("column {index}: {width} -> -{cut}");
                *width = width.saturating_sub(cut);
                excess -= deduction;
            }
            if widest < *width {
                widest = *width;
                widest_index = index;
            }
        }

        if excess > 0.0 {
            let cut = excess.floor() as usize;
            log::trace!("remainder {cut} taken from column {widest_index}");
            let width = &mut self.widths[widest_index];
            *width = width.saturating_sub(cut);
        }

        true
    }
}

impl From<Vec<usize>> for ColumnWidths {
    fn from(widths: Vec<usize>) -> Self {
        Self { widths }
    }
}
