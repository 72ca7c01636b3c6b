//! # Generation
//!
//! The asynchronous half of a submission. `update()` decides *that* a
//! generation starts and returns `Effect::SpawnGeneration`; this module runs
//! it on a tokio task and reports back with an `Action` on the UI channel.
//!
//! ```text
//! Effect::SpawnGeneration ─► spawn_generation ─► EssayGenerator::generate
//!                                                      │ (timeout)
//!        Action::GenerationComplete / GenerationFailed ◄┘
//! ```
//!
//! The returned `AbortHandle` is the cancellation token: aborting it drops
//! the pending completion, and `update()` ignores any completion whose
//! request id is no longer in flight.

mod fixed_delay;
mod generator;

pub use fixed_delay::FixedDelayGenerator;
pub use generator::{EssayGenerator, GenerationError};

use std::sync::{Arc, mpsc};
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::core::action::Action;
use crate::core::request::EssayRequest;

/// Runs `generator` for `request` on the current tokio runtime.
///
/// Must be called from within a runtime context.
pub fn spawn_generation(
    generator: Arc<dyn EssayGenerator>,
    request_id: Uuid,
    request: EssayRequest,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning generation {} with generator '{}'",
        request_id,
        generator.name()
    );
    let handle = tokio::spawn(async move {
        let action = match tokio::time::timeout(timeout, generator.generate(&request)).await {
            Ok(Ok(content)) => Action::GenerationComplete {
                request_id,
                content,
                generated_at: Utc::now(),
            },
            Ok(Err(error)) => Action::GenerationFailed { request_id, error },
            Err(_) => {
                warn!(
                    "Generation {} timed out after {:?}",
                    request_id, timeout
                );
                Action::GenerationFailed {
                    request_id,
                    error: GenerationError::Timeout(timeout),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver result of generation {}: receiver dropped",
                request_id
            );
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{CitationStyle, WordCount};
    use crate::test_support::{FailingGenerator, PendingGenerator};

    fn request() -> EssayRequest {
        EssayRequest::new("Climate Policy", WordCount::W500, CitationStyle::Apa).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivers_completion() {
        let (tx, rx) = mpsc::channel();
        let id = Uuid::new_v4();
        let generator = Arc::new(FixedDelayGenerator::default());
        spawn_generation(generator, id, request(), Duration::from_secs(30), tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;
        match rx.try_recv() {
            Ok(Action::GenerationComplete {
                request_id,
                content,
                ..
            }) => {
                assert_eq!(request_id, id);
                assert!(content.contains("Climate Policy"));
            }
            other => panic!("Expected GenerationComplete, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_generator_errors() {
        let (tx, rx) = mpsc::channel();
        let id = Uuid::new_v4();
        spawn_generation(
            Arc::new(FailingGenerator),
            id,
            request(),
            Duration::from_secs(30),
            tx,
        );

        tokio::time::sleep(Duration::from_millis(10)).await;
        match rx.try_recv() {
            Ok(Action::GenerationFailed { request_id, error }) => {
                assert_eq!(request_id, id);
                assert!(matches!(error, GenerationError::Unavailable(_)));
            }
            other => panic!("Expected GenerationFailed, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let (tx, rx) = mpsc::channel();
        let id = Uuid::new_v4();
        spawn_generation(
            Arc::new(PendingGenerator),
            id,
            request(),
            Duration::from_secs(5),
            tx,
        );

        tokio::time::sleep(Duration::from_secs(6)).await;
        match rx.try_recv() {
            Ok(Action::GenerationFailed { error, .. }) => {
                assert_eq!(error, GenerationError::Timeout(Duration::from_secs(5)));
            }
            other => panic!("Expected timeout, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_drops_completion() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_generation(
            Arc::new(FixedDelayGenerator::default()),
            Uuid::new_v4(),
            request(),
            Duration::from_secs(30),
            tx,
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        handle.abort();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected)));
    }
}
