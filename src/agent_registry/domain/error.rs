//! Error types for agent domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The agent identifier contains whitespace or control characters.
    #[error("agent id '{0}' contains whitespace or control characters")]
    InvalidAgentId(String),

    /// The agent identifier exceeds the 128-character limit.
    #[error("agent id exceeds 128 character limit: {0}")]
    AgentIdTooLong(String),

    /// The agent name is empty after trimming.
    #[error("agent name must not be empty")]
    EmptyAgentName,

    /// The agent name exceeds the 100-character limit.
    #[error("agent name exceeds 100 character limit: {0}")]
    AgentNameTooLong(String),

    /// The bound model type is empty after trimming.
    #[error("model type must not be empty")]
    EmptyModelType,

    /// The bound model type exceeds the 100-character limit.
    #[error("model type exceeds 100 character limit: {0}")]
    ModelTypeTooLong(String),

    /// The owning principal is empty after trimming.
    #[error("owner must not be empty")]
    EmptyOwner,
}

/// Error returned while parsing agent status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);
