//! In-memory model catalog for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::model_catalog::{
    domain::{Model, ModelId},
    ports::{ModelCatalogError, ModelCatalogRepository, ModelCatalogResult},
};

/// Thread-safe in-memory model catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModelCatalog {
    models: Arc<RwLock<HashMap<ModelId, Model>>>,
}

impl InMemoryModelCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModelCatalogRepository for InMemoryModelCatalog {
    async fn register(&self, model: &Model) -> ModelCatalogResult<()> {
        let mut models = self.models.write().map_err(|err| {
            ModelCatalogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if models.contains_key(&model.id()) {
            return Err(ModelCatalogError::DuplicateModel(model.id()));
        }
        models.insert(model.id(), model.clone());
        Ok(())
    }

    async fn update(&self, model: &Model) -> ModelCatalogResult<()> {
        let mut models = self.models.write().map_err(|err| {
            ModelCatalogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = models
            .get_mut(&model.id())
            .ok_or(ModelCatalogError::NotFound(model.id()))?;
        *slot = model.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ModelId) -> ModelCatalogResult<Option<Model>> {
        let models = self.models.read().map_err(|err| {
            ModelCatalogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(models.get(&id).cloned())
    }

    async fn list_all(&self) -> ModelCatalogResult<Vec<Model>> {
        let models = self.models.read().map_err(|err| {
            ModelCatalogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(models.values().cloned().collect())
    }
}
