//! The demo generator: waits a fixed time, then fills in the template.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::generator::{EssayGenerator, GenerationError};
use crate::core::config::DEFAULT_DELAY_MS;
use crate::core::request::EssayRequest;
use crate::core::template::build_essay;

pub struct FixedDelayGenerator {
    delay: Duration,
}

impl FixedDelayGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelayGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

#[async_trait]
impl EssayGenerator for FixedDelayGenerator {
    fn name(&self) -> &str {
        "fixed-delay"
    }

    async fn generate(&self, request: &EssayRequest) -> Result<String, GenerationError> {
        debug!("Sleeping {:?} before producing essay", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(build_essay(request))
    }
}
