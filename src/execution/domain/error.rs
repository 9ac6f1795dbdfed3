//! Error types for execution requests.

use thiserror::Error;

/// Validation failures that reject a request before any execution starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionRequestError {
    /// The batch names no agents.
    #[error("at least one agent id is required")]
    EmptyBatch,

    /// The input payload is absent.
    #[error("input data is required")]
    MissingInput,

    /// A single-agent request names no agent.
    #[error("agent id is required")]
    MissingAgentId,

    /// A batch entry is the empty string.
    #[error("agent id at position {position} is empty")]
    MissingBatchAgentId {
        /// Position of the entry in the batch.
        position: usize,
    },
}

/// Result type for dispatcher entry points.
pub type ExecutionRequestResult<T> = Result<T, ExecutionRequestError>;

/// Errors returned while constructing execution domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionDomainError {
    /// A confidence score is not a finite number in `[0, 1]`.
    #[error("confidence must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),
}
