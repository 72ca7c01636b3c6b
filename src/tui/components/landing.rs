//! # Landing Sections
//!
//! The static marketing sections around the essay panel: hero, feature
//! cards, call-to-action band and footer. All stateless; each exposes a
//! fixed `HEIGHT` so `ui.rs` can lay them out or drop them on short
//! terminals.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;
use crate::tui::icon::Icon;

const TAGLINE: &str = "Professional AI tool for creating academic texts with automatic citation formatting and bibliography generation";

/// Wrap `text` to `width` columns the way `Paragraph` would.
fn wrap(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

fn button(label: &str, icon: Option<Icon>, primary: bool) -> Vec<Span<'static>> {
    let style = if primary {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let text = match icon {
        Some(icon) => format!(" {} {} ", icon.glyph(), label),
        None => format!(" {} ", label),
    };
    if primary {
        vec![Span::styled(text, style)]
    } else {
        vec![
            Span::styled("[", style),
            Span::styled(text, style),
            Span::styled("]", style),
        ]
    }
}

pub struct Hero;

impl Hero {
    pub const HEIGHT: u16 = 7;
}

impl Component for Hero {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let badge = Style::default().fg(Color::Magenta);
        let mut lines = vec![
            Line::from(vec![
                Icon::Sparkles.span(badge),
                Span::styled(" AI-Powered Academic Writing", badge),
            ]),
            Line::from(Span::styled(
                "Generate Academic Essays",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "In Seconds",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ];

        // Two rows for the tagline; anything longer is cut
        let mut tagline = wrap(TAGLINE, area.width.saturating_sub(4));
        tagline.truncate(2);
        while tagline.len() < 2 {
            tagline.push(String::new());
        }
        lines.extend(
            tagline
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
        );

        let mut actions = button("Start Writing", Some(Icon::Rocket), true);
        actions.push(Span::raw("  "));
        actions.extend(button("Watch Demo", Some(Icon::Play), false));
        lines.push(Line::from(actions));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

struct Feature {
    icon: Icon,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Brain,
        title: "AI-Powered",
        desc: "Advanced language models trained on academic standards",
    },
    Feature {
        icon: Icon::BookOpen,
        title: "Auto Citations",
        desc: "Automatic formatting in APA, MLA, Chicago styles",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Quality Assured",
        desc: "Verified academic writing structures and formats",
    },
];

pub struct FeatureCards;

impl FeatureCards {
    /// Border, title row and up to three description rows.
    pub const HEIGHT: u16 = 6;
}

impl Component for FeatureCards {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(area);

        for (feature, column) in FEATURES.iter().zip(columns.iter()) {
            let inner_width = column.width.saturating_sub(2);
            let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

            let mut lines = vec![Line::from(vec![
                feature.icon.span(accent),
                Span::raw(" "),
                Span::styled(feature.title, Style::default().add_modifier(Modifier::BOLD)),
            ])];
            lines.extend(
                wrap(feature.desc, inner_width)
                    .into_iter()
                    .take(3)
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
            );

            let card = Paragraph::new(lines).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(card, *column);
        }
    }
}

pub struct CtaBand;

impl CtaBand {
    pub const HEIGHT: u16 = 3;
}

impl Component for CtaBand {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Ready to Transform Your Writing?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Join thousands of students and researchers using AI to accelerate their academic work",
                Style::default().fg(Color::Gray),
            )),
            Line::from(button("Get Started Free", Some(Icon::Zap), true)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = 1;
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = Span::styled(
            "© 2024 AcademicAI. Powered by advanced AI technology.",
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }
}
