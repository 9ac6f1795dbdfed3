//! Domain model for the model catalog.

mod error;
mod ids;
mod kind;
mod model;

pub use error::{ModelDomainError, ParseBackendKindError};
pub use ids::ModelId;
pub use kind::BackendKind;
pub use model::{DEFAULT_MODEL_VERSION, Model, ModelName};
