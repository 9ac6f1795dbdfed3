//! Error types for model catalog validation and parsing.

use thiserror::Error;

/// Errors returned while constructing model catalog values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelDomainError {
    /// The model name is empty after trimming.
    #[error("model name must not be empty")]
    EmptyModelName,

    /// The model name exceeds the 100-character limit.
    #[error("model name exceeds 100 character limit: {0}")]
    ModelNameTooLong(String),

    /// The model version is empty after trimming.
    #[error("model version must not be empty")]
    EmptyVersion,

    /// The backend kind is not recognised.
    #[error(transparent)]
    UnknownKind(#[from] ParseBackendKindError),
}

/// Error returned while parsing a backend kind tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown backend kind: {0}")]
pub struct ParseBackendKindError(pub String);
