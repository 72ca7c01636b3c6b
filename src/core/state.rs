//! # Application State
//!
//! Core business state for the essay panel. Domain data only, no TUI types;
//! presentation state (focus, active tab, cursor positions) lives in `tui`.
//!
//! ```text
//! App
//! ├── topic: String                  // free text, edited at any time
//! ├── word_count: WordCount          // selector, default 500
//! ├── citation_style: CitationStyle  // selector, default APA
//! ├── phase: Phase                   // Idle | InProgress { id, snapshot }
//! ├── document: Option<EssayDocument>// absent until the first completion
//! ├── status_message: String         // title bar text
//! ├── error: Option<String>          // last generation failure
//! └── completed_generations: usize   // completions accepted so far
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::config::ResolvedConfig;
use crate::core::request::{CitationStyle, EssayRequest, WordCount};

pub const WELCOME_MESSAGE: &str = "Welcome to AcademicAI!";

/// Generation lifecycle.
///
/// A finished generation goes straight back to `Idle`; whether a result
/// exists is tracked separately by `App::document`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InProgress {
        /// Identifies this submission. Completions carrying any other id are stale.
        request_id: Uuid,
        request: EssayRequest,
    },
}

/// The output buffer: generated once, then owned by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct EssayDocument {
    pub content: String,
    pub topic: String,
    pub word_count: WordCount,
    /// Style of the request that produced this document, not the form's current one.
    pub citation_style: CitationStyle,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct App {
    pub topic: String,
    pub word_count: WordCount,
    pub citation_style: CitationStyle,
    pub phase: Phase,
    pub document: Option<EssayDocument>,
    pub status_message: String,
    pub error: Option<String>,
    pub completed_generations: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            word_count: WordCount::default(),
            citation_style: CitationStyle::default(),
            phase: Phase::Idle,
            document: None,
            status_message: String::from(WELCOME_MESSAGE),
            error: None,
            completed_generations: 0,
        }
    }

    /// Starts from the configured defaults (and an optional pre-filled topic).
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            topic: config.initial_topic.clone().unwrap_or_default(),
            word_count: config.word_count,
            citation_style: config.citation_style,
            ..Self::new()
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::InProgress { .. })
    }

    pub fn has_result(&self) -> bool {
        self.document.is_some()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.topic.trim().is_empty()
    }

    /// Id of the in-flight request, if any.
    pub fn in_flight_id(&self) -> Option<Uuid> {
        match &self.phase {
            Phase::InProgress { request_id, .. } => Some(*request_id),
            Phase::Idle => None,
        }
    }
}
