//! Line-level text operations: alignment padding and word wrapping.

use smallvec::SmallVec;

use crate::cells::{blank, cell_len, truncate};
use crate::style::Align;

/// Lines produced by [`wrap`]. Most wrapped cells fit in a handful of lines.
pub type WrappedLines = SmallVec<[String; 4]>;

/// Word separator used by the wrapper.
const WS: char = ' ';

/// Pad `text` to `width` display units according to `align`.
///
/// `text_width` is the precomputed display width of `text`. Text that is
/// already as wide as (or wider than) `width` is written unchanged.
pub fn pad_into(out: &mut String, text: &str, text_width: usize, width: usize, align: Align) {
    let padding = width.saturating_sub(text_width);
    match align {
        Align::Left => {
            out.push_str(text);
            out.push_str(&blank(padding));
        }
        Align::Center => {
            let left_pad = padding / 2;
            out.push_str(&blank(left_pad));
            out.push_str(text);
            out.push_str(&blank(padding - left_pad));
        }
        Align::Right => {
            out.push_str(&blank(padding));
            out.push_str(text);
        }
    }
}

/// Pad `text` to `width` display units according to `align`.
#[must_use]
pub fn pad(text: &str, width: usize, align: Align) -> String {
    let mut out = String::with_capacity(text.len() + width);
    pad_into(&mut out, text, cell_len(text), width, align);
    out
}

/// Greedily word-wrap `text` so each line fits in `width` display units.
///
/// Words are separated by single spaces. A word wider than `width` is
/// emitted on its own line cut to `hard_limit` display units; the rest of
/// that word is dropped. Lines never carry trailing spaces.
#[must_use]
pub fn wrap(text: &str, width: usize, hard_limit: usize) -> WrappedLines {
    let mut lines = WrappedLines::new();
    let mut buffer = String::new();
    let mut buffer_width = 0;

    for word in text.split(WS) {
        let word_width = cell_len(word);
        if word_width > width {
            lines.push(truncate(word, hard_limit).to_string());
            continue;
        }

        let next_width = buffer_width + word_width;
        if next_width < width {
            buffer.push_str(word);
            buffer_width = next_width;
            if next_width + 1 < width {
                buffer.push(WS);
                buffer_width += 1;
            }
        } else {
            if !buffer.is_empty() {
                lines.push(buffer.trim_end_matches(WS).to_string());
            }
            buffer.clear();
            buffer.push_str(word);
            buffer.push(WS);
            buffer_width = word_width + 1;
        }
    }

    if !buffer.is_empty() {
        lines.push(buffer.trim_end_matches(WS).to_string());
    }

    log::trace!(
        "wrapped {} units into {} lines at width {width}",
        cell_len(text),
        lines.len()
    );
    lines
}
