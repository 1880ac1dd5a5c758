//! Display width calculations.
//!
//! Width is measured in code points: every `char` occupies one terminal
//! column. Wide (CJK, emoji) and combining characters are not special-cased,
//! so the layout stays predictable for any input.

/// Get the display width of a string.
///
/// This is the number of code points in `text`.
#[must_use]
#[inline]
pub fn cell_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncate a string to at most `max_width` display units.
///
/// Returns the original slice when it already fits.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> &str {
    chop_cells(text, max_width).0
}

/// Split a string at a display position.
///
/// Returns `(left, right)` where `left` holds the first `max_size` code points.
#[must_use]
pub fn chop_cells(text: &str, max_size: usize) -> (&str, &str) {
    match text.char_indices().nth(max_size) {
        Some((byte_pos, _)) => text.split_at(byte_pos),
        None => (text, ""),
    }
}

/// Build a run of `width` spaces.
#[must_use]
#[inline]
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(cell_len("hello"), 5);
        assert_eq!(cell_len("Hello, World!"), 13);
    }

    #[test]
    fn test_empty_width() {
        assert_eq!(cell_len(""), 0);
    }

    #[test]
    fn test_cyrillic_counts_code_points() {
        // Two bytes per char in UTF-8, one display unit each.
        assert_eq!(cell_len("Имя"), 3);
        assert_eq!("Имя".len(), 6);
    }

    #[test]
    fn test_wide_chars_count_once() {
        assert_eq!(cell_len("日本"), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte_boundary() {
        assert_eq!(truncate("Описание", 4), "Опис");
    }

    #[test]
    fn test_chop_cells() {
        assert_eq!(chop_cells("abcdef", 2), ("ab", "cdef"));
        assert_eq!(chop_cells("ab", 5), ("ab", ""));
    }

    #[test]
    fn test_blank() {
        assert_eq!(blank(3), "   ");
        assert_eq!(blank(0), "");
    }
}
