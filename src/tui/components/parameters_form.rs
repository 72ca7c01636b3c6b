//! # ParametersForm Component
//!
//! The Generator tab: topic input, word-count and citation-style selectors,
//! and the submit button.
//!
//! ## State Management
//!
//! The form owns presentation state only: which field has focus and the
//! topic cursor. The field values themselves belong to the core `App`; the
//! form holds a copy synced as props each frame and reports every change
//! as a `FormEvent` for the event loop to dispatch.
//!
//! ## Focus
//!
//! ```text
//! Topic ─Tab─► Word count ─Tab─► Citation style ─Tab─► Submit ─Tab─► Topic
//! ```
//!
//! Typing while a selector or the button has focus jumps back to the topic,
//! so the user never has to aim before typing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::request::{CitationStyle, WordCount};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::icon::Icon;

const PLACEHOLDER: &str = "e.g., The Impact of Artificial Intelligence on Modern Education";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    WordCount,
    CitationStyle,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Topic,
        FormField::WordCount,
        FormField::CitationStyle,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// High-level events emitted by the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    TopicChanged(String),
    WordCountChanged(WordCount),
    CitationStyleChanged(CitationStyle),
    Submit,
}

pub struct ParametersForm {
    topic: String,
    /// Byte offset into `topic`
    cursor: usize,
    pub focus: FormField,
    // Props, synced from App each frame
    pub word_count: WordCount,
    pub citation_style: CitationStyle,
    pub can_submit: bool,
    pub generating: bool,
    pub spinner_frame: usize,
}

impl ParametersForm {
    /// Height of the form including its border.
    pub const HEIGHT: u16 = 14;

    pub fn new(topic: &str, word_count: WordCount, citation_style: CitationStyle) -> Self {
        Self {
            topic: topic.to_string(),
            cursor: topic.len(),
            focus: FormField::Topic,
            word_count,
            citation_style,
            can_submit: false,
            generating: false,
            spinner_frame: 0,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    fn topic_changed(&self) -> Option<FormEvent> {
        Some(FormEvent::TopicChanged(self.topic.clone()))
    }

    fn insert_text(&mut self, text: &str) -> Option<FormEvent> {
        // Single-line field
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        self.topic.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
        self.topic_changed()
    }

    fn handle_topic(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::InputChar(c) => self.insert_text(&c.to_string()),
            TuiEvent::Paste(text) => self.insert_text(text),
            TuiEvent::Backspace => {
                let (prev, _) = self.topic[..self.cursor].char_indices().next_back()?;
                self.topic.drain(prev..self.cursor);
                self.cursor = prev;
                self.topic_changed()
            }
            TuiEvent::Delete => {
                let c = self.topic[self.cursor..].chars().next()?;
                self.topic.drain(self.cursor..self.cursor + c.len_utf8());
                self.topic_changed()
            }
            TuiEvent::CursorLeft => {
                if let Some((prev, _)) = self.topic[..self.cursor].char_indices().next_back() {
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if let Some(c) = self.topic[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.topic.len();
                None
            }
            TuiEvent::Submit => self.submit(),
            _ => None,
        }
    }

    fn submit(&self) -> Option<FormEvent> {
        self.can_submit.then_some(FormEvent::Submit)
    }

    fn field_block(&self, field: FormField, title: &str) -> Block<'static> {
        let border = if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", title), Style::default().fg(Color::Gray)))
    }

    fn selector_line(&self, field: FormField, value: String) -> Line<'static> {
        let arrows = if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled("◂ ", arrows),
            Span::raw(value),
            Span::styled(" ▸", arrows),
        ])
    }

    fn button_line(&self) -> Line<'static> {
        let (label, icon) = if self.generating {
            ("Generating Essay...", Icon::Loader.frame(self.spinner_frame))
        } else {
            ("Generate Academic Essay", Icon::Sparkles.glyph())
        };

        let mut style = if self.can_submit || self.generating {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };
        if self.focus == FormField::Submit {
            style = style.add_modifier(Modifier::BOLD);
        }
        let marker = if self.focus == FormField::Submit { "▶ " } else { "  " };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {} {} ", icon, label), style),
        ])
    }

    fn render_topic(&self, frame: &mut Frame, area: Rect) {
        let block = self.field_block(FormField::Topic, "Essay Topic");
        let inner_width = area.width.saturating_sub(2) as usize;

        // Keep the cursor inside the window
        let before = &self.topic[..self.cursor];
        let cursor_col = before.width();
        let skip_cols = cursor_col.saturating_sub(inner_width.saturating_sub(1));
        let mut skipped = 0;
        let visible: String = self
            .topic
            .chars()
            .skip_while(|c| {
                let take = skipped < skip_cols;
                if take {
                    skipped += c.width().unwrap_or(0);
                }
                take
            })
            .collect();

        let content = if self.topic.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::raw(visible)
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if self.focus == FormField::Topic {
            let x = area.x + 1 + cursor_col.saturating_sub(skipped).min(inner_width.saturating_sub(1)) as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl Component for ParametersForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::raw(" "),
                Icon::Settings.span(Style::default().fg(Color::Cyan)),
                Span::styled(" Essay Parameters ", Style::default().add_modifier(Modifier::BOLD)),
            ]));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [desc_area, topic_area, selectors_area, _, button_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Configure your essay requirements and let AI do the rest",
                Style::default().fg(Color::Gray),
            )),
            desc_area,
        );

        self.render_topic(frame, topic_area);

        let [words_area, style_area] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(1)
                .areas(selectors_area);
        frame.render_widget(
            Paragraph::new(self.selector_line(FormField::WordCount, self.word_count.label()))
                .block(self.field_block(FormField::WordCount, "Word Count")),
            words_area,
        );
        frame.render_widget(
            Paragraph::new(self.selector_line(
                FormField::CitationStyle,
                self.citation_style.label().to_string(),
            ))
            .block(self.field_block(FormField::CitationStyle, "Citation Style")),
            style_area,
        );

        frame.render_widget(
            Paragraph::new(self.button_line()).alignment(Alignment::Center),
            button_area,
        );

        let help = Line::from(Span::styled(
            "Tab next field · ◂ ▸ change · Enter generate · F2 preview",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
    }
}

impl EventHandler for ParametersForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::PrevField => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            FormField::Topic => self.handle_topic(event),
            FormField::WordCount => match event {
                TuiEvent::CursorLeft | TuiEvent::CursorUp => {
                    self.word_count = self.word_count.prev();
                    Some(FormEvent::WordCountChanged(self.word_count))
                }
                TuiEvent::CursorRight | TuiEvent::CursorDown => {
                    self.word_count = self.word_count.next();
                    Some(FormEvent::WordCountChanged(self.word_count))
                }
                TuiEvent::Submit => self.submit(),
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = FormField::Topic;
                    self.handle_topic(event)
                }
                _ => None,
            },
            FormField::CitationStyle => match event {
                TuiEvent::CursorLeft | TuiEvent::CursorUp => {
                    self.citation_style = self.citation_style.prev();
                    Some(FormEvent::CitationStyleChanged(self.citation_style))
                }
                TuiEvent::CursorRight | TuiEvent::CursorDown => {
                    self.citation_style = self.citation_style.next();
                    Some(FormEvent::CitationStyleChanged(self.citation_style))
                }
                TuiEvent::Submit => self.submit(),
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = FormField::Topic;
                    self.handle_topic(event)
                }
                _ => None,
            },
            FormField::Submit => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => self.submit(),
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = FormField::Topic;
                    self.handle_topic(event)
                }
                _ => None,
            },
        }
    }
}
