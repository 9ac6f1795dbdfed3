//! Backend kind tag.

use super::ParseBackendKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of prediction backend a model runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Hosted language-model inference.
    Language,
    /// Quantum oracle.
    Quantum,
}

impl BackendKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Quantum => "quantum",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BackendKind {
    type Error = ParseBackendKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "language" => Ok(Self::Language),
            "quantum" => Ok(Self::Quantum),
            _ => Err(ParseBackendKindError(value.to_owned())),
        }
    }
}
