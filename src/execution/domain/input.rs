//! Opaque execution input payload.

use super::ExecutionRequestError;
use std::fmt;
use std::sync::Arc;

/// Input payload shared by every execution in a request.
///
/// The payload is opaque to the dispatcher and is never trimmed or
/// rewritten. Cloning is cheap so a batch can hand the same payload to each
/// of its executions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionInput(Arc<str>);

impl ExecutionInput {
    /// Creates an input payload.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionRequestError::MissingInput`] when the payload is
    /// empty. Whitespace is an ordinary payload.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ExecutionRequestError> {
        let raw = value.as_ref();
        if raw.is_empty() {
            return Err(ExecutionRequestError::MissingInput);
        }
        Ok(Self(Arc::from(raw)))
    }

    /// Returns the payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; empty payloads are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for ExecutionInput {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExecutionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
