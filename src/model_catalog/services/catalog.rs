//! Service layer for model catalog registration and updates.

use crate::model_catalog::{
    domain::{BackendKind, DEFAULT_MODEL_VERSION, Model, ModelDomainError, ModelId, ModelName},
    ports::{ModelCatalogError, ModelCatalogRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a catalog model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterModelRequest {
    name: String,
    kind: String,
    version: Option<String>,
    description: String,
}

impl RegisterModelRequest {
    /// Creates a request with the required name and backend kind tag.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version: None,
            description: String::new(),
        }
    }

    /// Sets the version. Defaults to [`DEFAULT_MODEL_VERSION`].
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update for a catalog model.
///
/// Identity and backend kind are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPatch {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
}

/// Service-level errors for model catalog operations.
#[derive(Debug, Error)]
pub enum ModelCatalogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ModelDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ModelCatalogError),
}

/// Result type for model catalog service operations.
pub type ModelCatalogServiceResult<T> = Result<T, ModelCatalogServiceError>;

/// Model catalog orchestration service.
#[derive(Clone)]
pub struct ModelCatalogService<R, C>
where
    R: ModelCatalogRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ModelCatalogService<R, C>
where
    R: ModelCatalogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new model catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogServiceError::Domain`] when the name, kind tag or
    /// version is invalid, or [`ModelCatalogServiceError::Repository`] when
    /// persistence fails.
    pub async fn register(
        &self,
        request: RegisterModelRequest,
    ) -> ModelCatalogServiceResult<Model> {
        let RegisterModelRequest {
            name,
            kind,
            version,
            description,
        } = request;

        let model_name = ModelName::new(name)?;
        let backend_kind = BackendKind::try_from(kind.as_str()).map_err(ModelDomainError::from)?;
        let model = Model::new(
            model_name,
            backend_kind,
            version.unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_owned()),
            description,
            &*self.clock,
        )?;
        self.repository.register(&model).await?;
        Ok(model)
    }

    /// Finds a model by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: ModelId) -> ModelCatalogServiceResult<Option<Model>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns all catalog models.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> ModelCatalogServiceResult<Vec<Model>> {
        Ok(self.repository.list_all().await?)
    }

    /// Updates a model's name and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogServiceError::Domain`] when the new name is
    /// invalid, or [`ModelCatalogServiceError::Repository`] when the model is
    /// not found or persistence fails.
    pub async fn update(&self, id: ModelId, patch: ModelPatch) -> ModelCatalogServiceResult<Model> {
        let new_name = patch.name.map(ModelName::new).transpose()?;

        let mut model = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ModelCatalogError::NotFound(id))?;
        if let Some(name) = new_name {
            model.rename(name, &*self.clock);
        }
        if let Some(description) = patch.description {
            model.describe(description, &*self.clock);
        }
        self.repository.update(&model).await?;
        Ok(model)
    }
}
