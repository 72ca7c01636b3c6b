use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::request::EssayRequest;

/// Errors a generator can report.
/// The bundled fixed-delay generator never fails; only the timeout wrapper
/// in `spawn_generation` produces `Timeout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No answer within the configured timeout. Retryable.
    Timeout(Duration),
    /// Backend could not be reached. Retryable.
    Unavailable(String),
    /// Backend answered with something that is not an essay. Not retryable.
    Malformed(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Timeout(after) => {
                write!(f, "timed out after {}s", after.as_secs_f32())
            }
            GenerationError::Unavailable(msg) => write!(f, "generator unavailable: {msg}"),
            GenerationError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

#[async_trait]
pub trait EssayGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Produces the essay text for a request snapshot.
    async fn generate(&self, request: &EssayRequest) -> Result<String, GenerationError>;
}
