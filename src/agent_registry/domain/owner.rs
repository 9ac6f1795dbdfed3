//! Owning principal of an agent.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner recorded when a registration does not name one.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Principal that owns an agent, usually a wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a validated, trimmed owner identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyOwner`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyOwner);
        }
        Ok(Self(normalized))
    }

    /// Returns the zero-address owner.
    #[must_use]
    pub fn zero() -> Self {
        Self(ZERO_ADDRESS.to_owned())
    }

    /// Returns the owner as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
