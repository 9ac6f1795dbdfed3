//! Port contracts for the model catalog.

pub mod repository;

pub use repository::{ModelCatalogError, ModelCatalogRepository, ModelCatalogResult};
