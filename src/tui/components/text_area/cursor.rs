//! Cursor position tracking and navigation for the TextArea.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and the
//! viewport size seen at the last render. All navigation methods accept
//! `buffer: &str` explicitly; the text itself is owned by `TextArea`.

use super::text_wrap::{
    BORDER_OFFSET, VisualLine, display_width, inner_height, inner_width, is_soft_wrapped, line_of,
    pos_at_column, prev_char_boundary, visual_lines,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible visual line
    pub scroll_offset: usize,
    /// Outer width from last render (used for cursor movement)
    pub last_width: u16,
    /// Outer height from last render (used for paging)
    pub last_height: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 20;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
            last_height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    fn lines(&self, buffer: &str) -> Vec<VisualLine> {
        visual_lines(buffer, inner_width(self.last_width))
    }

    /// Number of text rows visible at the last render.
    pub fn page_size(&self) -> usize {
        (inner_height(self.last_height) as usize).max(1)
    }

    /// Move the cursor `delta` visual lines, keeping its column where possible.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, buffer: &str, delta: isize) -> bool {
        let lines = self.lines(buffer);
        let current = line_of(&lines, self.pos);
        let target = (current as isize + delta).clamp(0, lines.len() as isize - 1) as usize;
        if target == current {
            return false;
        }

        let column = display_width(&buffer[lines[current].start..self.pos]);
        let mut pos = pos_at_column(buffer, lines[target], column);
        // The end of a soft-wrapped line is the start of the next one.
        if pos == lines[target].end && is_soft_wrapped(&lines, target) {
            pos = prev_char_boundary(buffer, pos);
        }
        self.pos = pos;
        true
    }

    /// Start of the current logical line.
    pub fn line_start(&self, buffer: &str) -> usize {
        buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    /// End of the current logical line (before its `\n`).
    pub fn line_end(&self, buffer: &str) -> usize {
        buffer[self.pos..]
            .find('\n')
            .map(|i| self.pos + i)
            .unwrap_or(buffer.len())
    }

    /// Scroll just enough to keep the cursor's line inside the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str) {
        let lines = self.lines(buffer);
        let current = line_of(&lines, self.pos);
        let visible = self.page_size();
        let max_scroll = lines.len().saturating_sub(visible);

        if current < self.scroll_offset {
            self.scroll_offset = current;
        } else if current >= self.scroll_offset + visible {
            self.scroll_offset = current + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// Terminal cell of the cursor for a widget rendered at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let lines = visual_lines(buffer, width);
        let current = line_of(&lines, self.pos);
        let column = display_width(&buffer[lines[current].start..self.pos]) as u16;
        let row = current.saturating_sub(self.scroll_offset) as u16;

        let x = area.x + BORDER_OFFSET + column.min(width.saturating_sub(1));
        let y = area.y + BORDER_OFFSET + row.min(inner_height(area.height).saturating_sub(1));
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cursor whose inner text width is `inner` columns and `rows` rows high.
    fn cursor(inner: u16, rows: u16) -> CursorState {
        CursorState {
            pos: 0,
            scroll_offset: 0,
            last_width: inner + 3,
            last_height: rows + 2,
        }
    }

    #[test]
    fn test_move_down_keeps_column() {
        let buffer = "hello\nworld";
        let mut c = cursor(20, 5);
        c.pos = 3;
        assert!(c.move_vertically(buffer, 1));
        assert_eq!(c.pos, 9);
        assert!(c.move_vertically(buffer, -1));
        assert_eq!(c.pos, 3);
    }

    #[test]
    fn test_move_clamps_to_shorter_line() {
        let buffer = "hello world\nhi";
        let mut c = cursor(20, 5);
        c.pos = 10;
        assert!(c.move_vertically(buffer, 1));
        assert_eq!(c.pos, buffer.len());
    }

    #[test]
    fn test_move_at_boundary_returns_false() {
        let buffer = "one\ntwo";
        let mut c = cursor(20, 5);
        assert!(!c.move_vertically(buffer, -1));
        c.pos = buffer.len();
        assert!(!c.move_vertically(buffer, 1));
    }

    #[test]
    fn test_move_onto_soft_wrapped_line_stays_on_it() {
        // Lines: "abc" "def" "gh" at inner width 3
        let buffer = "abcdefgh";
        let mut c = cursor(3, 5);
        c.pos = 8; // end of "gh", column 2
        assert!(c.move_vertically(buffer, -1));
        assert_eq!(c.pos, 5); // 'f', still on the second line
        c.pos = 7; // column 1 on "gh"
        assert!(c.move_vertically(buffer, -1));
        assert_eq!(c.pos, 4);
    }

    #[test]
    fn test_page_moves_clamp() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut c = cursor(10, 2);
        assert!(c.move_vertically(buffer, c.page_size() as isize * 10));
        assert_eq!(c.pos, buffer.len() - 1);
    }

    #[test]
    fn test_line_start_and_end() {
        let buffer = "first\nsecond line\nthird";
        let mut c = cursor(40, 5);
        c.pos = 9;
        assert_eq!(c.line_start(buffer), 6);
        assert_eq!(c.line_end(buffer), 17);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut c = cursor(10, 2);
        c.pos = buffer.len();
        c.update_scroll_offset(buffer);
        assert_eq!(c.scroll_offset, 4);

        c.pos = 0;
        c.update_scroll_offset(buffer);
        assert_eq!(c.scroll_offset, 0);
    }

    #[test]
    fn test_screen_pos_accounts_for_border_and_scroll() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut c = cursor(10, 2);
        c.pos = buffer.len();
        c.update_scroll_offset(buffer);
        let area = Rect::new(5, 5, 13, 4);
        assert_eq!(c.screen_pos(buffer, area), (7, 7));
    }
}
