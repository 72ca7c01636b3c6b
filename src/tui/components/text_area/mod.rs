//! # TextArea Component
//!
//! Multi-line editor for the generated essay.
//!
//! ## Responsibilities
//!
//! - Hold the editable copy of the document text
//! - Handle editing (typing, newline, backspace, delete, paste)
//! - Handle navigation (arrows, Home/End, PageUp/PageDown, mouse wheel)
//! - Soft-wrap and scroll the text to the widget's size
//!
//! ## State Management
//!
//! The buffer is internal state, loaded with `set_text` whenever the core
//! replaces the document. Every edit is reported as `TextAreaEvent::Changed`
//! so the parent can push the new content back to the core. Cursor position
//! and scroll state are encapsulated in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{inner_width, next_char_boundary, prev_char_boundary, visual_lines};

/// Lines moved per mouse wheel notch.
const WHEEL_LINES: isize = 3;

/// High-level events emitted by the TextArea
#[derive(Debug, Clone, PartialEq)]
pub enum TextAreaEvent {
    /// The buffer content changed
    Changed,
    /// Only the cursor moved
    CursorMoved,
}

pub struct TextArea {
    buffer: String,
    cursor: CursorState,
    /// Whether the cursor is drawn (Prop)
    pub focused: bool,
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the whole buffer and move the cursor to the top.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor.reset();
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect, total_lines: usize) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let visible = self.cursor.page_size();
        if total_lines <= visible {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(total_lines - visible)
            .position(self.cursor.scroll_offset);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(2),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextArea {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_width = area.width;
        self.cursor.last_height = area.height;
        self.cursor.update_scroll_offset(&self.buffer);

        let lines = visual_lines(&self.buffer, inner_width(area.width));
        let total_lines = lines.len();
        let cursor_pos = self.cursor.screen_pos(&self.buffer, area);

        let visible: Vec<Line> = lines
            .iter()
            .skip(self.cursor.scroll_offset)
            .take(self.cursor.page_size())
            .map(|l| Line::raw(&self.buffer[l.start..l.end]))
            .collect();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(visible).block(block), area);
        self.render_scrollbar(frame, area, total_lines);

        if self.focused {
            frame.set_cursor_position(cursor_pos);
        }
    }
}

impl EventHandler for TextArea {
    type Event = TextAreaEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(TextAreaEvent::Changed)
            }
            TuiEvent::Submit => {
                self.insert_str("\n");
                Some(TextAreaEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let cleaned = text.replace("\r\n", "\n").replace('\r', "\n").replace('\t', "    ");
                self.insert_str(&cleaned);
                Some(TextAreaEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(TextAreaEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(TextAreaEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                let moved = self.cursor.pos > 0;
                if moved {
                    self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                }
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::CursorRight => {
                let moved = self.cursor.pos < self.buffer.len();
                if moved {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::CursorHome => {
                let start = self.cursor.line_start(&self.buffer);
                let moved = start != self.cursor.pos;
                self.cursor.pos = start;
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::CursorEnd => {
                let end = self.cursor.line_end(&self.buffer);
                let moved = end != self.cursor.pos;
                self.cursor.pos = end;
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::CursorUp => {
                let moved = self.cursor.move_vertically(&self.buffer, -1);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::CursorDown => {
                let moved = self.cursor.move_vertically(&self.buffer, 1);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::PageUp => {
                let page = self.cursor.page_size() as isize;
                let moved = self.cursor.move_vertically(&self.buffer, -page);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::PageDown => {
                let page = self.cursor.page_size() as isize;
                let moved = self.cursor.move_vertically(&self.buffer, page);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::ScrollUp => {
                let moved = self.cursor.move_vertically(&self.buffer, -WHEEL_LINES);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            TuiEvent::ScrollDown => {
                let moved = self.cursor.move_vertically(&self.buffer, WHEEL_LINES);
                moved.then_some(TextAreaEvent::CursorMoved)
            }
            _ => None,
        }
    }
}
