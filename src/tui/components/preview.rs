//! # Preview Component
//!
//! The Preview tab: the generated essay, either as an editable text area or
//! rendered as markdown in a scroll view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PreviewState` lives in `TuiState` (editor buffer, mode, scroll offset)
//! - `Preview` is created each frame with borrowed state and the current document
//!
//! The editor is the only copy the user types into. Every edit is reported
//! as `PreviewEvent::Edited` so the core document stays in sync; when the
//! core replaces the document the event loop calls `load`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::EssayDocument;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_area::{TextArea, TextAreaEvent};
use crate::tui::event::TuiEvent;
use crate::tui::icon::Icon;
use crate::tui::markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Edit,
    Rendered,
}

/// Events emitted by the preview.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    Edited(String),
    Export,
}

/// Persistent state for the preview tab.
pub struct PreviewState {
    pub editor: TextArea,
    pub mode: PreviewMode,
    pub scroll_state: ScrollViewState,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            editor: TextArea::new(),
            mode: PreviewMode::default(),
            scroll_state: ScrollViewState::default(),
        }
    }

    /// Replace the editor content with a freshly generated document.
    pub fn load(&mut self, content: &str) {
        self.editor.set_text(content);
        self.scroll_state.scroll_to_top();
    }

    /// Handle a key event. Nothing happens until a document exists.
    pub fn handle_event(&mut self, event: &TuiEvent, has_document: bool) -> Option<PreviewEvent> {
        if !has_document {
            return None;
        }
        match event {
            TuiEvent::ToggleRendered => {
                self.mode = match self.mode {
                    PreviewMode::Edit => PreviewMode::Rendered,
                    PreviewMode::Rendered => PreviewMode::Edit,
                };
                None
            }
            TuiEvent::Export => Some(PreviewEvent::Export),
            _ => match self.mode {
                PreviewMode::Edit => match self.editor.handle_event(event)? {
                    TextAreaEvent::Changed => {
                        Some(PreviewEvent::Edited(self.editor.text().to_string()))
                    }
                    TextAreaEvent::CursorMoved => None,
                },
                PreviewMode::Rendered => {
                    match event {
                        TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
                        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                            self.scroll_state.scroll_down()
                        }
                        TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
                        TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
                        TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
                        TuiEvent::CursorEnd => self.scroll_state.scroll_to_bottom(),
                        _ => {}
                    }
                    None
                }
            },
        }
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the preview tab.
pub struct Preview<'a> {
    state: &'a mut PreviewState,
    document: Option<&'a EssayDocument>,
}

impl<'a> Preview<'a> {
    pub fn new(state: &'a mut PreviewState, document: Option<&'a EssayDocument>) -> Self {
        Self { state, document }
    }

    fn header(&self) -> Vec<Line<'static>> {
        let accent = Style::default().fg(Color::Cyan);
        let mut title = vec![
            Icon::FileText.span(accent),
            Span::styled(" Generated Essay", Style::default().add_modifier(Modifier::BOLD)),
        ];
        let description = match self.document {
            Some(doc) => {
                title.push(Span::raw("   "));
                title.push(Span::styled(
                    format!("[{} Export]", Icon::Download.glyph()),
                    accent,
                ));
                format!(
                    "Formatted in {} style with automatic citations",
                    doc.citation_style
                )
            }
            None => String::from("Your generated essay will appear here"),
        };
        vec![
            Line::from(title),
            Line::from(Span::styled(description, Style::default().fg(Color::Gray))),
        ]
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Icon::FileQuestion.span(Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                "No essay generated yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Switch to Generator tab to create your essay",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }

    fn render_markdown(&mut self, frame: &mut Frame, area: Rect, content: &str) {
        let content_width = area.width.saturating_sub(1);
        let paragraph =
            Paragraph::new(markdown::render(content, Color::White)).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for Preview<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [header_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        frame.render_widget(Paragraph::new(self.header()), header_area);

        let Some(document) = self.document else {
            self.render_empty(frame, body_area);
            return;
        };

        let help = match self.state.mode {
            PreviewMode::Edit => "Ctrl+R rendered view · Ctrl+E export · F1 generator",
            PreviewMode::Rendered => "Ctrl+R edit · ↑↓ scroll · Ctrl+E export · F1 generator",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            help_area,
        );

        match self.state.mode {
            PreviewMode::Edit => self.state.editor.render(frame, body_area),
            PreviewMode::Rendered => self.render_markdown(frame, body_area, &document.content),
        }
    }
}
