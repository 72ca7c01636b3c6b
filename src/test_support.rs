//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::request::EssayRequest;
use crate::core::state::App;
use crate::generation::{EssayGenerator, GenerationError};

/// A generator whose backend is always down.
pub struct FailingGenerator;

#[async_trait]
impl EssayGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: &EssayRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable("backend offline".to_string()))
    }
}

/// A generator that never answers.
pub struct PendingGenerator;

#[async_trait]
impl EssayGenerator for PendingGenerator {
    fn name(&self) -> &str {
        "pending"
    }

    async fn generate(&self, _request: &EssayRequest) -> Result<String, GenerationError> {
        std::future::pending().await
    }
}

/// Creates an App in its initial state.
pub fn test_app() -> App {
    App::new()
}

/// Creates an App with the topic field already filled in.
pub fn app_with_topic(topic: &str) -> App {
    App {
        topic: topic.to_string(),
        ..App::new()
    }
}
