//! Simulated language-model backend.

use crate::agent_registry::domain::ModelType;
use crate::execution::{
    domain::{Confidence, ExecutionInput, ModelOutput},
    ports::{ModelExecutor, ModelExecutorError, ModelExecutorResult},
};
use async_trait::async_trait;
use std::time::Duration;

/// Confidence reported by [`SimulatedLanguageBackend`] unless overridden.
pub const DEFAULT_LANGUAGE_CONFIDENCE: f64 = 0.95;

/// Language backend that answers `Analyzed: <input>`.
///
/// Latency is simulated with a tokio sleep so deadline handling can be
/// exercised without a real model.
#[derive(Debug, Clone)]
pub struct SimulatedLanguageBackend {
    confidence: Confidence,
    latency: Duration,
    max_input_len: Option<usize>,
}

impl Default for SimulatedLanguageBackend {
    fn default() -> Self {
        Self {
            confidence: Confidence::saturating(DEFAULT_LANGUAGE_CONFIDENCE),
            latency: Duration::ZERO,
            max_input_len: None,
        }
    }
}

impl SimulatedLanguageBackend {
    /// Creates a backend with default confidence and no latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reported confidence.
    #[must_use]
    pub const fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the simulated latency per call.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Rejects payloads longer than `max` bytes as malformed.
    #[must_use]
    pub const fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }
}

#[async_trait]
impl ModelExecutor for SimulatedLanguageBackend {
    async fn execute(
        &self,
        _model_type: &ModelType,
        input: &ExecutionInput,
        _budget: Duration,
    ) -> ModelExecutorResult<ModelOutput> {
        if let Some(max) = self.max_input_len
            && input.len() > max
        {
            return Err(ModelExecutorError::MalformedInput(format!(
                "payload of {} bytes exceeds {max}",
                input.len()
            )));
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(ModelOutput::new(
            format!("Analyzed: {input}"),
            self.confidence,
        ))
    }
}
