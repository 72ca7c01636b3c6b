use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CtaBand, FeatureCards, Footer, Hero, ParametersForm, Preview, TitleBar,
};
use crate::tui::icon::Icon;
use crate::tui::{Tab, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;

const TITLE_HEIGHT: u16 = 1;
const TABS_HEIGHT: u16 = 1;

/// Below this height only the title bar, tabs and panel are drawn.
pub const FULL_LAYOUT_MIN_HEIGHT: u16 = TITLE_HEIGHT
    + Hero::HEIGHT
    + FeatureCards::HEIGHT
    + TABS_HEIGHT
    + ParametersForm::HEIGHT
    + CtaBand::HEIGHT
    + Footer::HEIGHT;

struct PageAreas {
    title: Rect,
    hero: Option<Rect>,
    features: Option<Rect>,
    tabs: Rect,
    panel: Rect,
    cta: Option<Rect>,
    footer: Option<Rect>,
}

fn page_layout(area: Rect) -> PageAreas {
    use Constraint::{Length, Min};

    if area.height < FULL_LAYOUT_MIN_HEIGHT {
        let [title, tabs, panel] =
            Layout::vertical([Length(TITLE_HEIGHT), Length(TABS_HEIGHT), Min(0)]).areas(area);
        return PageAreas {
            title,
            hero: None,
            features: None,
            tabs,
            panel,
            cta: None,
            footer: None,
        };
    }

    let [title, hero, features, tabs, panel, cta, footer] = Layout::vertical([
        Length(TITLE_HEIGHT),
        Length(Hero::HEIGHT),
        Length(FeatureCards::HEIGHT),
        Length(TABS_HEIGHT),
        Min(ParametersForm::HEIGHT),
        Length(CtaBand::HEIGHT),
        Length(Footer::HEIGHT),
    ])
    .areas(area);
    PageAreas {
        title,
        hero: Some(hero),
        features: Some(features),
        tabs,
        panel,
        cta: Some(cta),
        footer: Some(footer),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let areas = page_layout(frame.area());

    let mut title_bar = TitleBar::new(app.status_message.clone(), app.error.is_some());
    title_bar.render(frame, areas.title);

    if let Some(area) = areas.hero {
        Hero.render(frame, area);
    }
    if let Some(area) = areas.features {
        FeatureCards.render(frame, area);
    }

    draw_tabs(frame, areas.tabs, tui.tab);

    match tui.tab {
        Tab::Generator => {
            // Top-align the form in a tall panel
            let height = areas.panel.height.min(ParametersForm::HEIGHT);
            let form_area = Rect { height, ..areas.panel };
            tui.form.render(frame, form_area);
        }
        Tab::Preview => {
            Preview::new(&mut tui.preview, app.document.as_ref()).render(frame, areas.panel);
        }
    }

    if let Some(area) = areas.cta {
        CtaBand.render(frame, area);
    }
    if let Some(area) = areas.footer {
        Footer.render(frame, area);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let titles = [
        Line::from(vec![
            Span::raw(Icon::Wand.glyph()),
            Span::raw(" Generator (F1)"),
        ]),
        Line::from(vec![
            Span::raw(Icon::Eye.glyph()),
            Span::raw(" Preview (F2)"),
        ]),
    ];
    let selected = match active {
        Tab::Generator => 0,
        Tab::Preview => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::template::build_essay;
    use crate::test_support::app_with_topic;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn completed_app(topic: &str) -> App {
        let mut app = app_with_topic(topic);
        let (request_id, request) = match update(&mut app, Action::Submit) {
            crate::core::action::Effect::SpawnGeneration {
                request_id,
                request,
            } => (request_id, request),
            other => panic!("Expected SpawnGeneration, got {:?}", other),
        };
        update(
            &mut app,
            Action::GenerationComplete {
                request_id,
                content: build_essay(&request),
                generated_at: Utc::now(),
            },
        );
        app
    }

    #[test]
    fn test_full_layout_on_tall_terminal() {
        let app = App::new();
        let mut tui = TuiState::new(&app);
        let text = screen(&app, &mut tui, 110, FULL_LAYOUT_MIN_HEIGHT + 4);

        assert!(text.contains("AcademicAI"));
        assert!(text.contains("Generate Academic Essays"));
        assert!(text.contains("Auto Citations"));
        assert!(text.contains("Generator (F1)"));
        assert!(text.contains("Essay Parameters"));
        assert!(text.contains("Ready to Transform Your Writing?"));
        assert!(text.contains("2024 AcademicAI"));
    }

    #[test]
    fn test_short_terminal_hides_marketing() {
        let app = App::new();
        let mut tui = TuiState::new(&app);
        let text = screen(&app, &mut tui, 80, 24);

        assert!(text.contains("Welcome to AcademicAI!"));
        assert!(text.contains("Essay Parameters"));
        assert!(!text.contains("Generate Academic Essays"));
        assert!(!text.contains("Ready to Transform"));
    }

    #[test]
    fn test_preview_tab_empty_state() {
        let app = App::new();
        let mut tui = TuiState::new(&app);
        tui.tab = Tab::Preview;
        let text = screen(&app, &mut tui, 80, 24);

        assert!(text.contains("No essay generated yet"));
        assert!(!text.contains("Essay Parameters"));
    }

    #[test]
    fn test_preview_tab_with_document() {
        let app = completed_app("Climate Policy");
        let mut tui = TuiState::new(&app);
        tui.preview.load(&app.document.as_ref().unwrap().content);
        tui.tab = Tab::Preview;
        let text = screen(&app, &mut tui, 80, 30);

        assert!(text.contains("Formatted in APA style with automatic citations"));
        assert!(text.contains("# Climate Policy"));
        assert!(text.contains("Essay ready"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = completed_app("Climate Policy");
        let mut tui = TuiState::new(&app);
        screen(&app, &mut tui, 10, 3);
        tui.tab = Tab::Preview;
        screen(&app, &mut tui, 10, 3);
    }
}
