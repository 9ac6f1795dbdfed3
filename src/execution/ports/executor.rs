//! Model executor port.

use crate::agent_registry::domain::ModelType;
use crate::execution::domain::{ExecutionInput, ModelOutput};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for model executor calls.
pub type ModelExecutorResult<T> = Result<T, ModelExecutorError>;

/// Backend that turns an input payload into a model output.
///
/// Implementations may be slow or may never return; the dispatcher bounds
/// every call with its own deadline and drops the future when it elapses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelExecutor: Send + Sync {
    /// Runs `input` against the model identified by `model_type`.
    ///
    /// `budget` is the time remaining before the caller's deadline. Backends
    /// may use it to shorten their own work but are not required to.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelExecutorError`] when the backend rejects the input,
    /// is unavailable, has no binding for the model type or fails at runtime.
    async fn execute(
        &self,
        model_type: &ModelType,
        input: &ExecutionInput,
        budget: Duration,
    ) -> ModelExecutorResult<ModelOutput>;
}

/// Errors reported by model backends.
#[derive(Debug, Clone, Error)]
pub enum ModelExecutorError {
    /// The backend cannot process the payload.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The backend is offline or out of capacity.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// No backend is bound for the model type.
    #[error("no backend bound for model type '{0}'")]
    UnboundModelType(ModelType),

    /// The backend failed while producing output.
    #[error("backend runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ModelExecutorError {
    /// Wraps a backend runtime error.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
