//! # Icons
//!
//! The fixed icon set of the page, as a closed enum mapped to single-cell
//! terminal glyphs. Every glyph is one column wide so layouts can count on it.

use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GraduationCap,
    FileText,
    Book,
    Sparkles,
    Rocket,
    Play,
    Brain,
    BookOpen,
    CheckCircle,
    Wand,
    Eye,
    Settings,
    Loader,
    Download,
    FileQuestion,
    Zap,
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::GraduationCap => "▲",
            Icon::FileText => "≡",
            Icon::Book => "▤",
            Icon::Sparkles => "✦",
            Icon::Rocket => "➚",
            Icon::Play => "▶",
            Icon::Brain => "◉",
            Icon::BookOpen => "❐",
            Icon::CheckCircle => "✔",
            Icon::Wand => "✧",
            Icon::Eye => "◎",
            Icon::Settings => "⚙",
            Icon::Loader => SPINNER_FRAMES[0],
            Icon::Download => "↓",
            Icon::FileQuestion => "?",
            Icon::Zap => "ϟ",
        }
    }

    /// Glyph for an animation frame. Only `Loader` animates.
    pub fn frame(self, frame: usize) -> &'static str {
        match self {
            Icon::Loader => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
            other => other.glyph(),
        }
    }

    pub fn span(self, style: Style) -> Span<'static> {
        Span::styled(self.glyph(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    const ALL: [Icon; 16] = [
        Icon::GraduationCap,
        Icon::FileText,
        Icon::Book,
        Icon::Sparkles,
        Icon::Rocket,
        Icon::Play,
        Icon::Brain,
        Icon::BookOpen,
        Icon::CheckCircle,
        Icon::Wand,
        Icon::Eye,
        Icon::Settings,
        Icon::Loader,
        Icon::Download,
        Icon::FileQuestion,
        Icon::Zap,
    ];

    #[test]
    fn test_glyphs_are_single_cell() {
        for icon in ALL {
            assert_eq!(icon.glyph().width(), 1, "{:?}", icon);
        }
    }

    #[test]
    fn test_loader_animates_and_wraps() {
        assert_ne!(Icon::Loader.frame(0), Icon::Loader.frame(1));
        assert_eq!(Icon::Loader.frame(0), Icon::Loader.frame(SPINNER_FRAMES.len()));
        assert_eq!(Icon::Sparkles.frame(7), Icon::Sparkles.glyph());
    }
}
