//! Routing executor selecting a backend by model type.

use crate::agent_registry::domain::{AgentDomainError, ModelType};
use crate::execution::{
    domain::{ExecutionInput, ModelOutput},
    ports::{ModelExecutor, ModelExecutorError, ModelExecutorResult},
};
use crate::model_catalog::domain::{BackendKind, Model};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Executor that forwards each call to the backend bound to its model type.
///
/// Model types are bound to a [`BackendKind`]; each kind maps to one
/// executor. Unbound model types fall back to the default kind when one is
/// set and fail with [`ModelExecutorError::UnboundModelType`] otherwise.
#[derive(Clone, Default)]
pub struct BackendRouter {
    backends: HashMap<BackendKind, Arc<dyn ModelExecutor>>,
    bindings: HashMap<ModelType, BackendKind>,
    default_kind: Option<BackendKind>,
}

impl BackendRouter {
    /// Creates a router with no backends or bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the executor serving `kind`, replacing any previous one.
    #[must_use]
    pub fn with_backend(mut self, kind: BackendKind, backend: Arc<dyn ModelExecutor>) -> Self {
        self.backends.insert(kind, backend);
        self
    }

    /// Binds a model type to a backend kind.
    #[must_use]
    pub fn bind(mut self, model_type: ModelType, kind: BackendKind) -> Self {
        self.bindings.insert(model_type, kind);
        self
    }

    /// Routes unbound model types to `kind`.
    #[must_use]
    pub const fn with_default_kind(mut self, kind: BackendKind) -> Self {
        self.default_kind = Some(kind);
        self
    }

    /// Binds every catalog model's name to its backend kind.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when a model name is not a valid model
    /// type identifier.
    pub fn bind_models(mut self, models: &[Model]) -> Result<Self, AgentDomainError> {
        for model in models {
            let model_type = ModelType::new(model.name().as_str())?;
            self.bindings.insert(model_type, model.kind());
        }
        Ok(self)
    }

    /// Returns the backend kind a model type resolves to.
    #[must_use]
    pub fn resolve(&self, model_type: &ModelType) -> Option<BackendKind> {
        self.bindings.get(model_type).copied().or(self.default_kind)
    }
}

impl std::fmt::Debug for BackendRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRouter")
            .field("backends", &self.backends.keys().collect::<Vec<_>>())
            .field("bindings", &self.bindings)
            .field("default_kind", &self.default_kind)
            .finish()
    }
}

#[async_trait]
impl ModelExecutor for BackendRouter {
    async fn execute(
        &self,
        model_type: &ModelType,
        input: &ExecutionInput,
        budget: Duration,
    ) -> ModelExecutorResult<ModelOutput> {
        let kind = self
            .resolve(model_type)
            .ok_or_else(|| ModelExecutorError::UnboundModelType(model_type.clone()))?;
        let backend = self
            .backends
            .get(&kind)
            .ok_or_else(|| ModelExecutorError::Unavailable(format!("no {kind} backend installed")))?;
        debug!(model_type = %model_type, backend = %kind, "routing execution");
        backend.execute(model_type, input, budget).await
    }
}
