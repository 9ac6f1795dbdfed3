//! Application services for the model catalog.

mod catalog;

pub use catalog::{
    ModelCatalogService, ModelCatalogServiceError, ModelCatalogServiceResult, ModelPatch,
    RegisterModelRequest,
};
