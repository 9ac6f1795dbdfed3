//! Identifier type for registered agents.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const MAX_ID_LENGTH: usize = 128;

/// Caller-visible agent identifier.
///
/// Agent identifiers are opaque strings (for example `"1"` or a UUID). They
/// are trimmed on construction and may not contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] when the value is blank,
    /// [`AgentDomainError::AgentIdTooLong`] when it exceeds 128 characters, or
    /// [`AgentDomainError::InvalidAgentId`] when it contains whitespace or
    /// control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AgentDomainError::EmptyAgentId);
        }
        if trimmed.chars().count() > MAX_ID_LENGTH {
            return Err(AgentDomainError::AgentIdTooLong(raw));
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(AgentDomainError::InvalidAgentId(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Generates a fresh UUID-backed identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
