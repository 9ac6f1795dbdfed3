//! Repository port for catalog model persistence.

use crate::model_catalog::domain::{Model, ModelId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for model catalog operations.
pub type ModelCatalogResult<T> = Result<T, ModelCatalogError>;

/// Model catalog persistence contract.
#[async_trait]
pub trait ModelCatalogRepository: Send + Sync {
    /// Stores a new model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogError::DuplicateModel`] when the identifier
    /// already exists.
    async fn register(&self, model: &Model) -> ModelCatalogResult<()>;

    /// Persists changes to an existing model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelCatalogError::NotFound`] when the model does not exist.
    async fn update(&self, model: &Model) -> ModelCatalogResult<()>;

    /// Finds a model by identifier.
    async fn find_by_id(&self, id: ModelId) -> ModelCatalogResult<Option<Model>>;

    /// Returns all catalog models.
    async fn list_all(&self) -> ModelCatalogResult<Vec<Model>>;
}

/// Errors returned by model catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum ModelCatalogError {
    /// A model with the same identifier already exists.
    #[error("duplicate model identifier: {0}")]
    DuplicateModel(ModelId),

    /// The model was not found.
    #[error("model not found: {0}")]
    NotFound(ModelId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ModelCatalogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
