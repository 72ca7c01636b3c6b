//! Essay markdown → ratatui `Text` renderer for the preview's reading mode.
//!
//! Built on `pulldown_cmark`. Covers what an essay draft uses: headings,
//! paragraphs, emphasis (journal and book titles are italic), lists, block
//! quotes, rules and plain code blocks. Heading markers are dropped;
//! the heading level is carried by style alone.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Render essay markdown using `base_fg` for body text.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline styles; each entry is already patched onto its parent.
    styles: Vec<Style>,
    /// Per-line prefixes (block quote bar, code gutter).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = bullets, Some(n) = numbered, next number n.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
    /// A blank line goes before the next block.
    pending_gap: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            line_prefixes: vec![],
            lists: vec![],
            in_code_block: false,
            pending_gap: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn new_line(&mut self) {
        let line = Line::from(self.line_prefixes.clone());
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.text.lines.push(Line::from(span)),
        }
    }

    fn start_block(&mut self) {
        if self.pending_gap {
            self.text.lines.push(Line::default());
            self.pending_gap = false;
        }
        self.new_line();
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = self.style().add_modifier(Modifier::REVERSED);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.new_line(),
            Event::Rule => {
                self.start_block();
                self.push_span(Span::styled("─".repeat(40), Style::default().fg(Color::DarkGray)));
                self.pending_gap = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // List items hold their paragraph on the marker line
                if self.lists.is_empty() {
                    self.start_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.start_block();
                self.push_style(heading_style(self.base_fg, level));
            }
            Tag::BlockQuote(_) => {
                self.line_prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(_) => {
                self.start_block();
                self.text.lines.pop();
                self.line_prefixes
                    .push(Span::styled("  ", Style::default()));
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() && self.pending_gap {
                    self.text.lines.push(Line::default());
                    self.pending_gap = false;
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.new_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{indent}{n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("{indent}• "),
                };
                self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { .. } => {
                self.push_style(Style::default().add_modifier(Modifier::UNDERLINED))
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.pending_gap = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.pending_gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.pending_gap = true;
            }
            TagEnd::CodeBlock => {
                self.line_prefixes.pop();
                self.in_code_block = false;
                self.pending_gap = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.pending_gap = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.pop_style()
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if self.in_code_block {
            let style = Style::default().fg(Color::Gray);
            for line in text.lines() {
                self.new_line();
                self.push_span(Span::styled(line.to_owned(), style));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{CitationStyle, EssayRequest, WordCount};
    use crate::core::template::build_essay;

    fn plain_lines(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_heading_markers_dropped_and_styled() {
        let text = render("# Climate Policy\n\n## Introduction", Color::White);
        let lines = plain_lines(&text);
        assert_eq!(lines[0], "Climate Policy");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Introduction");

        let title = &text.lines[0].spans[0];
        assert!(title.style.add_modifier.contains(Modifier::UNDERLINED));
        let section = &text.lines[2].spans[0];
        assert!(section.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(section.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_italic_titles() {
        let text = render("Smith, C. (2023). *Journal of Academic Studies*, 15(3).", Color::White);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "Journal of Academic Studies")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(span.style.fg, Some(Color::White));
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let text = render("First.\n\nSecond.", Color::White);
        assert_eq!(plain_lines(&text), vec!["First.", "", "Second."]);
    }

    #[test]
    fn test_soft_breaks_join_lines() {
        let text = render("one\ntwo", Color::White);
        assert_eq!(plain_lines(&text), vec!["one two"]);
    }

    #[test]
    fn test_lists() {
        let text = render("- a\n- b\n\n1. x\n2. y", Color::White);
        let lines = plain_lines(&text);
        assert_eq!(lines[0], "• a");
        assert_eq!(lines[1], "• b");
        assert!(lines.contains(&"1. x".to_string()));
        assert!(lines.contains(&"2. y".to_string()));
    }

    #[test]
    fn test_block_quote_prefixed() {
        let text = render("> quoted", Color::White);
        assert_eq!(plain_lines(&text), vec!["│ quoted"]);
    }

    #[test]
    fn test_code_block_indented_and_tabs_expanded() {
        let text = render("```\n\tcode\n```", Color::White);
        let lines = plain_lines(&text);
        assert!(lines.iter().any(|l| l == "      code"), "{:?}", lines);
        assert!(!lines.iter().any(|l| l.contains('\t')));
    }

    #[test]
    fn test_full_essay_renders_all_sections() {
        let request = EssayRequest::new("Climate Policy", WordCount::W500, CitationStyle::Apa).unwrap();
        let text = render(&build_essay(&request), Color::White);
        let lines = plain_lines(&text);
        for heading in ["Climate Policy", "Introduction", "Main Body", "Conclusion", "References"] {
            assert!(lines.iter().any(|l| l == heading), "missing {heading}");
        }
        assert!(lines.iter().any(|l| l == "Citation style: APA 7th Edition"));
    }
}
