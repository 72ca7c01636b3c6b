//! # TitleBar Component
//!
//! Top navigation bar: product name and menu entries on the left, the
//! current status on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.error.is_some());
//! title_bar.render(frame, area);
//! ```
//!
//! ### Conditional Formatting
//!
//! 1. **Error**: status drawn in red with a leading `!`
//! 2. **Status message**: status drawn dimmed
//! 3. **Empty status**: right side left blank
//!
//! On narrow terminals the menu is dropped before the status so the most
//! important text stays visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::icon::Icon;

pub const PRODUCT_NAME: &str = "AcademicAI";
const MENU: [(Icon, &str); 2] = [(Icon::FileText, "Features"), (Icon::Book, "Resources")];
const CALL_TO_ACTION: &str = " Get Started ";

/// Top navigation bar showing the product, menu and status.
///
/// # Props
///
/// - `status_message`: Transient status (e.g., "Generating essay...")
/// - `has_error`: Whether the status describes a failure
pub struct TitleBar {
    pub status_message: String,
    pub has_error: bool,
}

impl TitleBar {
    pub fn new(status_message: String, has_error: bool) -> Self {
        Self {
            status_message,
            has_error,
        }
    }

    fn brand(&self) -> Vec<Span<'static>> {
        let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        vec![
            Span::raw(" "),
            Icon::GraduationCap.span(accent),
            Span::raw(" "),
            Span::styled(PRODUCT_NAME, accent),
        ]
    }

    fn menu(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let style = Style::default().fg(Color::Gray);
        for (icon, entry) in MENU {
            spans.push(Span::raw("   "));
            spans.push(icon.span(style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(entry, style));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            CALL_TO_ACTION,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans
    }

    fn status(&self) -> Line<'static> {
        if self.status_message.is_empty() {
            return Line::default();
        }
        let line = if self.has_error {
            Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(self.status_message.clone(), Style::default().fg(Color::Red)),
            ])
        } else {
            Line::from(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        };
        line.right_aligned()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut left = self.brand();
        let status = self.status();

        let brand_width: usize = left.iter().map(|s| s.content.width()).sum();
        let menu = self.menu();
        let menu_width: usize = menu.iter().map(|s| s.content.width()).sum();
        let needed = brand_width + menu_width + status.width() + 2;
        if needed <= area.width as usize {
            left.extend(menu);
        }

        let left_width = left.iter().map(|s| s.content.width()).sum::<usize>() as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Length(left_width), Constraint::Min(0)]).areas(area);

        frame.render_widget(Paragraph::new(Line::from(left)), left_area);
        frame.render_widget(Paragraph::new(status), right_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_brand_menu_and_status() {
        let mut title_bar = TitleBar::new("Welcome to AcademicAI!".to_string(), false);
        let text = screen(&mut title_bar, 100);

        assert!(text.contains("AcademicAI"));
        assert!(text.contains("≡ Features"));
        assert!(text.contains("▤ Resources"));
        assert!(text.contains("Get Started"));
        assert!(text.contains("Welcome to AcademicAI!"));
        assert!(!text.contains("! Welcome"));
    }

    #[test]
    fn test_title_bar_error_marker() {
        let mut title_bar = TitleBar::new("Generation failed: timed out after 30s".to_string(), true);
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("! Generation failed"));

        let marker = buffer.content().iter().find(|c| c.symbol() == "!").unwrap();
        assert_eq!(marker.fg, Color::Red);
    }

    #[test]
    fn test_title_bar_narrow_drops_menu_keeps_status() {
        let mut title_bar = TitleBar::new("Generating essay...".to_string(), false);
        let text = screen(&mut title_bar, 40);

        assert!(text.contains("AcademicAI"));
        assert!(text.contains("Generating essay..."));
        assert!(!text.contains("Resources"));
    }

    #[test]
    fn test_title_bar_empty_status() {
        let mut title_bar = TitleBar::new(String::new(), false);
        let text = screen(&mut title_bar, 100);

        assert!(text.contains("Get Started"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new(String::new(), false);
        title_bar.status_message = "Essay ready (F2 to preview)".to_string();
        title_bar.has_error = true;

        assert_eq!(title_bar.status_message, "Essay ready (F2 to preview)");
        assert!(title_bar.has_error);
    }
}
