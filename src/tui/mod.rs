//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (generation in progress): draws every ~80ms so the
//!   button spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize
//!   or a message from the generation task.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod icon;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::generation::{EssayGenerator, FixedDelayGenerator, spawn_generation};
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ParametersForm, PreviewEvent, PreviewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which half of the panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generator,
    Preview,
}

impl Tab {
    fn toggle(self) -> Self {
        match self {
            Tab::Generator => Tab::Preview,
            Tab::Preview => Tab::Generator,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub tab: Tab,
    // Persistent component states
    pub form: ParametersForm,
    pub preview: PreviewState,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            tab: Tab::default(),
            form: ParametersForm::new(&app.topic, app.word_count, app.citation_style),
            preview: PreviewState::new(),
        }
    }

    /// Copy the props the form renders from the core state.
    fn sync_props(&mut self, app: &App, spinner_frame: usize) {
        self.form.word_count = app.word_count;
        self.form.citation_style = app.citation_style;
        self.form.can_submit = app.can_submit();
        self.form.generating = app.is_generating();
        self.form.spinner_frame = spinner_frame;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Carries out the `Effect`s returned by `update()`.
///
/// Owns the handle of the one generation task that may be running.
struct EffectRunner {
    generator: Arc<dyn EssayGenerator>,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
    active: Option<AbortHandle>,
}

impl EffectRunner {
    fn new(generator: Arc<dyn EssayGenerator>, timeout: Duration, tx: mpsc::Sender<Action>) -> Self {
        Self {
            generator,
            timeout,
            tx,
            active: None,
        }
    }

    /// Run `action` through the core and apply its effect.
    ///
    /// Returns `true` when the app should quit.
    fn dispatch(&mut self, app: &mut App, tui: &mut TuiState, action: Action) -> bool {
        debug!("Dispatching {:?}", action);
        match update(app, action) {
            Effect::None => false,
            Effect::Quit => true,
            Effect::SpawnGeneration {
                request_id,
                request,
            } => {
                if let Some(stale) = self.active.take() {
                    warn!("Aborting a generation task left running");
                    stale.abort();
                }
                self.active = Some(spawn_generation(
                    self.generator.clone(),
                    request_id,
                    request,
                    self.timeout,
                    self.tx.clone(),
                ));
                false
            }
            Effect::AbortGeneration => {
                if let Some(handle) = self.active.take() {
                    handle.abort();
                }
                false
            }
            Effect::GenerationEnded => {
                self.active = None;
                false
            }
            Effect::DocumentReplaced => {
                self.active = None;
                if let Some(doc) = &app.document {
                    tui.preview.load(&doc.content);
                }
                false
            }
        }
    }
}

/// Route one terminal event. Returns `true` when the app should quit.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    runner: &mut EffectRunner,
) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::ForceQuit => runner.dispatch(app, tui, Action::Quit),
        TuiEvent::Escape if app.is_generating() => {
            runner.dispatch(app, tui, Action::CancelGeneration)
        }
        TuiEvent::Escape => runner.dispatch(app, tui, Action::Quit),
        TuiEvent::ShowGenerator => {
            tui.tab = Tab::Generator;
            false
        }
        TuiEvent::ShowPreview => {
            tui.tab = Tab::Preview;
            false
        }
        TuiEvent::ToggleTab => {
            tui.tab = tui.tab.toggle();
            false
        }
        event => match tui.tab {
            Tab::Generator => {
                let Some(form_event) = tui.form.handle_event(&event) else {
                    return false;
                };
                let action = match form_event {
                    FormEvent::TopicChanged(topic) => Action::SetTopic(topic),
                    FormEvent::WordCountChanged(word_count) => Action::SetWordCount(word_count),
                    FormEvent::CitationStyleChanged(style) => Action::SetCitationStyle(style),
                    FormEvent::Submit => Action::Submit,
                };
                runner.dispatch(app, tui, action)
            }
            Tab::Preview => {
                let Some(preview_event) = tui.preview.handle_event(&event, app.has_result()) else {
                    return false;
                };
                let action = match preview_event {
                    PreviewEvent::Edited(content) => Action::EditResult(content),
                    PreviewEvent::Export => Action::Export,
                };
                runner.dispatch(app, tui, action)
            }
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator: Arc<dyn EssayGenerator> = Arc::new(FixedDelayGenerator::new(config.delay));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);
    info!(
        "Starting with generator '{}' (delay={:?}, timeout={:?})",
        generator.name(),
        config.delay,
        config.timeout
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the generation task
    let (tx, rx) = mpsc::channel();
    let mut runner = EffectRunner::new(generator, config.timeout, tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = app.is_generating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            tui.sync_props(&app, spinner_frame);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Keep props current between events of one batch
            tui.sync_props(&app, 0);
            if handle_event(event, &mut app, &mut tui, &mut runner) {
                break 'main;
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if runner.dispatch(&mut app, &mut tui, action) {
                break 'main;
            }
        }
    }

    if let Some(handle) = runner.active.take() {
        info!("Aborting generation in flight at exit");
        handle.abort();
    }
    info!(
        "Exiting after {} completed generation(s)",
        app.completed_generations
    );

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::core::request::CitationStyle;
    use crate::test_support::{FailingGenerator, app_with_topic};

    fn setup(delay_ms: u64) -> (EffectRunner, mpsc::Receiver<Action>) {
        let generator = Arc::new(FixedDelayGenerator::new(Duration::from_millis(delay_ms)));
        setup_with(generator)
    }

    fn setup_with(generator: Arc<dyn EssayGenerator>) -> (EffectRunner, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (EffectRunner::new(generator, Duration::from_secs(30), tx), rx)
    }

    fn press(event: TuiEvent, app: &mut App, tui: &mut TuiState, runner: &mut EffectRunner) -> bool {
        tui.sync_props(app, 0);
        handle_event(event, app, tui, runner)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_and_enter_runs_a_generation() {
        let mut app = App::new();
        let mut tui = TuiState::new(&app);
        let (mut runner, rx) = setup(2000);

        for c in "Climate Policy".chars() {
            press(TuiEvent::InputChar(c), &mut app, &mut tui, &mut runner);
        }
        assert_eq!(app.topic, "Climate Policy");

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        assert!(app.is_generating());
        assert!(runner.active.is_some());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let action = rx.try_recv().unwrap();
        assert!(!runner.dispatch(&mut app, &mut tui, action));

        assert!(matches!(app.phase, Phase::Idle));
        assert!(runner.active.is_none());
        assert!(tui.preview.editor.text().contains("Climate Policy"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_cancels_then_quits() {
        let mut app = app_with_topic("Climate Policy");
        let mut tui = TuiState::new(&app);
        let (mut runner, rx) = setup(2000);

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        assert!(!press(TuiEvent::Escape, &mut app, &mut tui, &mut runner));
        assert!(!app.is_generating());
        assert!(runner.active.is_none());

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(rx.try_recv().is_err());
        assert!(!app.has_result());

        assert!(press(TuiEvent::Escape, &mut app, &mut tui, &mut runner));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_generation_releases_task_handle() {
        let mut app = app_with_topic("Climate Policy");
        let mut tui = TuiState::new(&app);
        let (mut runner, rx) = setup_with(Arc::new(FailingGenerator));

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        assert!(runner.active.is_some());

        tokio::time::sleep(Duration::from_millis(10)).await;
        let action = rx.try_recv().unwrap();
        assert!(matches!(action, Action::GenerationFailed { .. }));
        assert!(!runner.dispatch(&mut app, &mut tui, action));

        assert!(!app.is_generating());
        assert!(app.error.is_some());
        assert!(runner.active.is_none());
    }

    #[tokio::test]
    async fn test_enter_with_blank_topic_does_nothing() {
        let mut app = app_with_topic("   ");
        let mut tui = TuiState::new(&app);
        let (mut runner, _rx) = setup(2000);

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        assert!(!app.is_generating());
        assert!(runner.active.is_none());
    }

    #[tokio::test]
    async fn test_tabs_and_selectors() {
        let mut app = App::new();
        let mut tui = TuiState::new(&app);
        let (mut runner, _rx) = setup(2000);

        press(TuiEvent::NextField, &mut app, &mut tui, &mut runner);
        press(TuiEvent::NextField, &mut app, &mut tui, &mut runner);
        press(TuiEvent::CursorRight, &mut app, &mut tui, &mut runner);
        assert_eq!(app.citation_style, CitationStyle::Mla);

        press(TuiEvent::ShowPreview, &mut app, &mut tui, &mut runner);
        assert_eq!(tui.tab, Tab::Preview);
        press(TuiEvent::ToggleTab, &mut app, &mut tui, &mut runner);
        assert_eq!(tui.tab, Tab::Generator);
        press(TuiEvent::ShowPreview, &mut app, &mut tui, &mut runner);
        press(TuiEvent::ShowGenerator, &mut app, &mut tui, &mut runner);
        assert_eq!(tui.tab, Tab::Generator);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_edits_and_export_reach_core() {
        let mut app = app_with_topic("Climate Policy");
        let mut tui = TuiState::new(&app);
        let (mut runner, rx) = setup(10);

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let action = rx.try_recv().unwrap();
        runner.dispatch(&mut app, &mut tui, action);

        press(TuiEvent::ShowPreview, &mut app, &mut tui, &mut runner);
        press(TuiEvent::InputChar('>'), &mut app, &mut tui, &mut runner);
        let doc = app.document.as_ref().unwrap();
        assert!(doc.content.starts_with("># Climate Policy"));

        press(TuiEvent::Export, &mut app, &mut tui, &mut runner);
        assert_eq!(app.status_message, "Export is not available yet");
    }

    #[tokio::test]
    async fn test_force_quit_always_quits() {
        let mut app = app_with_topic("Climate Policy");
        let mut tui = TuiState::new(&app);
        let (mut runner, _rx) = setup(2000);

        press(TuiEvent::Submit, &mut app, &mut tui, &mut runner);
        assert!(press(TuiEvent::ForceQuit, &mut app, &mut tui, &mut runner));
    }
}
