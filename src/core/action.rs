//! # Actions
//!
//! Everything that can happen on the panel becomes an `Action`.
//! User presses Enter on the form? That's `Action::Submit`.
//! The generator finishes? That's `Action::GenerationComplete { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No side effects here. Timers and tasks live in `generation`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::core::request::{CitationStyle, EssayRequest, WordCount};
use crate::core::state::{App, EssayDocument, Phase};
use crate::generation::GenerationError;

#[derive(Debug, Clone)]
pub enum Action {
    SetTopic(String),
    SetWordCount(WordCount),
    SetCitationStyle(CitationStyle),
    Submit,
    GenerationComplete {
        request_id: Uuid,
        content: String,
        generated_at: DateTime<Utc>,
    },
    GenerationFailed {
        request_id: Uuid,
        error: GenerationError,
    },
    CancelGeneration,
    EditResult(String),
    Export,
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Start the generator for this snapshot.
    SpawnGeneration {
        request_id: Uuid,
        request: EssayRequest,
    },
    /// Abort the running generation task.
    AbortGeneration,
    /// The document was replaced wholesale; editors must reload it.
    DocumentReplaced,
    /// The generation task ended without a document.
    GenerationEnded,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetTopic(topic) => {
            app.topic = topic;
            Effect::None
        }
        Action::SetWordCount(word_count) => {
            app.word_count = word_count;
            Effect::None
        }
        Action::SetCitationStyle(style) => {
            app.citation_style = style;
            Effect::None
        }
        Action::Submit => submit(app),
        Action::GenerationComplete {
            request_id,
            content,
            generated_at,
        } => complete(app, request_id, content, generated_at),
        Action::GenerationFailed { request_id, error } => {
            if app.in_flight_id() != Some(request_id) {
                debug!("Ignoring failure of stale request {}", request_id);
                return Effect::None;
            }
            warn!("Generation {} failed: {}", request_id, error);
            app.phase = Phase::Idle;
            app.status_message = format!("Generation failed: {error}");
            app.error = Some(error.to_string());
            Effect::GenerationEnded
        }
        Action::CancelGeneration => {
            let Some(request_id) = app.in_flight_id() else {
                return Effect::None;
            };
            info!("Generation {} cancelled", request_id);
            app.phase = Phase::Idle;
            app.status_message = String::from("Generation cancelled");
            Effect::AbortGeneration
        }
        Action::EditResult(content) => {
            match app.document.as_mut() {
                Some(doc) => doc.content = content,
                None => debug!("EditResult ignored: no document yet"),
            }
            Effect::None
        }
        Action::Export => {
            if app.has_result() {
                info!("Export requested");
                app.status_message = String::from("Export is not available yet");
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App) -> Effect {
    if app.is_generating() {
        debug!("Submit ignored: a generation is already in progress");
        return Effect::None;
    }
    let Some(request) = EssayRequest::new(&app.topic, app.word_count, app.citation_style) else {
        debug!("Submit ignored: topic is blank");
        return Effect::None;
    };

    let request_id = Uuid::new_v4();
    info!(
        "Submitting request {} (topic={:?}, words={}, style={})",
        request_id, request.topic, request.word_count, request.citation_style
    );
    app.phase = Phase::InProgress {
        request_id,
        request: request.clone(),
    };
    app.error = None;
    app.status_message = String::from("Generating essay...");
    Effect::SpawnGeneration {
        request_id,
        request,
    }
}

fn complete(
    app: &mut App,
    request_id: Uuid,
    content: String,
    generated_at: DateTime<Utc>,
) -> Effect {
    let request = match &app.phase {
        Phase::InProgress {
            request_id: current,
            request,
        } if *current == request_id => request.clone(),
        _ => {
            debug!("Ignoring completion of stale request {}", request_id);
            return Effect::None;
        }
    };

    info!(
        "Generation {} complete ({} bytes)",
        request_id,
        content.len()
    );
    app.document = Some(EssayDocument {
        content,
        topic: request.topic,
        word_count: request.word_count,
        citation_style: request.citation_style,
        generated_at,
    });
    app.phase = Phase::Idle;
    app.completed_generations += 1;
    app.status_message = String::from("Essay ready (F2 to preview)");
    Effect::DocumentReplaced
}
