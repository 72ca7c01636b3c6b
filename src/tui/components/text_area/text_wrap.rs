//! Soft-wrapping of the editor buffer into visual lines.
//!
//! Lines are broken at character boundaries (monospace text area, no word
//! wrapping) so every visual line maps back to an exact byte range of the
//! buffer. Cursor math depends on that mapping.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border on each side plus the scrollbar column.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 3;
/// Top + bottom border.
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from the widget's outer edge to the first text cell.
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn inner_width(width: u16) -> u16 {
    width.saturating_sub(HORIZONTAL_OVERHEAD)
}

pub(super) fn inner_height(height: u16) -> u16 {
    height.saturating_sub(VERTICAL_OVERHEAD)
}

/// Byte range `start..end` of one visual line. Never includes the `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct VisualLine {
    pub start: usize,
    pub end: usize,
}

/// Split `buffer` into visual lines no wider than `width` columns.
/// A width of 0 disables wrapping. Always returns at least one line.
pub(super) fn visual_lines(buffer: &str, width: u16) -> Vec<VisualLine> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut offset = 0;

    for logical in buffer.split('\n') {
        let mut start = offset;
        let mut col = 0;
        for (i, ch) in logical.char_indices() {
            let w = ch.width().unwrap_or(0);
            if width > 0 && col > 0 && col + w > width {
                lines.push(VisualLine {
                    start,
                    end: offset + i,
                });
                start = offset + i;
                col = 0;
            }
            col += w;
        }
        lines.push(VisualLine {
            start,
            end: offset + logical.len(),
        });
        offset += logical.len() + 1;
    }

    lines
}

/// Index of the visual line holding byte position `pos`.
///
/// At a soft-wrap boundary the position belongs to the following line.
pub(super) fn line_of(lines: &[VisualLine], pos: usize) -> usize {
    lines
        .iter()
        .rposition(|line| line.start <= pos)
        .unwrap_or(0)
}

/// True when `lines[idx]` continues on the next visual line without a `\n`.
pub(super) fn is_soft_wrapped(lines: &[VisualLine], idx: usize) -> bool {
    lines
        .get(idx + 1)
        .is_some_and(|next| next.start == lines[idx].end && lines[idx].end > lines[idx].start)
}

/// Display width of a slice, in terminal columns.
pub(super) fn display_width(s: &str) -> usize {
    s.width()
}

/// Byte position inside `line` closest to display column `column`.
pub(super) fn pos_at_column(buffer: &str, line: VisualLine, column: usize) -> usize {
    let mut col = 0;
    for (i, ch) in buffer[line.start..line.end].char_indices() {
        let w = ch.width().unwrap_or(0);
        if col + w > column {
            return line.start + i;
        }
        col += w;
    }
    line.end
}

pub(super) fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

pub(super) fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(buffer: &str, width: u16) -> Vec<(usize, usize)> {
        visual_lines(buffer, width)
            .into_iter()
            .map(|l| (l.start, l.end))
            .collect()
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        assert_eq!(ranges("", 10), vec![(0, 0)]);
    }

    #[test]
    fn test_hard_newlines() {
        assert_eq!(ranges("ab\n\ncd", 10), vec![(0, 2), (3, 3), (4, 6)]);
        assert_eq!(ranges("ab\n", 10), vec![(0, 2), (3, 3)]);
    }

    #[test]
    fn test_soft_wrap_at_width() {
        assert_eq!(ranges("abcdefg", 3), vec![(0, 3), (3, 6), (6, 7)]);
        assert_eq!(ranges("abc", 3), vec![(0, 3)]);
    }

    #[test]
    fn test_zero_width_disables_wrap() {
        assert_eq!(ranges("abcdefg", 0), vec![(0, 7)]);
    }

    #[test]
    fn test_wide_chars_wrap_by_columns() {
        // Each CJK char is 2 columns, 3 bytes.
        assert_eq!(ranges("日本語", 4), vec![(0, 6), (6, 9)]);
    }

    #[test]
    fn test_line_of_prefers_next_line_at_soft_wrap() {
        let lines = visual_lines("abcdef", 3);
        assert_eq!(line_of(&lines, 0), 0);
        assert_eq!(line_of(&lines, 2), 0);
        assert_eq!(line_of(&lines, 3), 1);
        assert_eq!(line_of(&lines, 6), 1);
    }

    #[test]
    fn test_line_of_hard_newline_stays_on_line() {
        let lines = visual_lines("ab\ncd", 10);
        assert_eq!(line_of(&lines, 2), 0);
        assert_eq!(line_of(&lines, 3), 1);
    }

    #[test]
    fn test_is_soft_wrapped() {
        let lines = visual_lines("abcdef\nx", 3);
        assert!(is_soft_wrapped(&lines, 0));
        assert!(!is_soft_wrapped(&lines, 1));
        assert!(!is_soft_wrapped(&lines, 2));
    }

    #[test]
    fn test_pos_at_column() {
        let buffer = "hello";
        let line = VisualLine { start: 0, end: 5 };
        assert_eq!(pos_at_column(buffer, line, 0), 0);
        assert_eq!(pos_at_column(buffer, line, 3), 3);
        assert_eq!(pos_at_column(buffer, line, 99), 5);
    }

    #[test]
    fn test_char_boundaries() {
        let s = "aé日";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(prev_char_boundary(s, 6), 3);
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(next_char_boundary(s, s.len()), s.len());
    }
}
