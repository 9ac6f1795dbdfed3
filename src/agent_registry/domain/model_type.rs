//! Model-type identifier an agent is bound to.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_MODEL_TYPE_LENGTH: usize = 100;

/// Identifier of the model an agent executes against (for example `GPT-4`).
///
/// The execution layer resolves this identifier to a backend kind; the
/// registry treats it as an opaque label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelType(String);

impl ModelType {
    /// Creates a validated, trimmed model-type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyModelType`] when the value is blank or
    /// [`AgentDomainError::ModelTypeTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_owned();

        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyModelType);
        }
        if normalized.chars().count() > MAX_MODEL_TYPE_LENGTH {
            return Err(AgentDomainError::ModelTypeTooLong(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
