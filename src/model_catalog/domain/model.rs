//! Catalog model aggregate root.

use super::{BackendKind, ModelDomainError, ModelId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 100;

/// Version assigned when a registration does not name one.
pub const DEFAULT_MODEL_VERSION: &str = "1.0";

/// Validated model display name such as `GPT-4 Turbo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Creates a validated, trimmed model name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelDomainError::EmptyModelName`] when the value is blank or
    /// [`ModelDomainError::ModelNameTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_owned();
        if normalized.is_empty() {
            return Err(ModelDomainError::EmptyModelName);
        }
        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(ModelDomainError::ModelNameTooLong(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog model aggregate root.
///
/// Identity and backend kind are fixed at creation. Only the name and
/// description can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    id: ModelId,
    name: ModelName,
    kind: BackendKind,
    version: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Model {
    /// Creates a catalog model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelDomainError::EmptyVersion`] when the version is blank.
    pub fn new(
        name: ModelName,
        kind: BackendKind,
        version: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ModelDomainError> {
        let normalized_version = version.into().trim().to_owned();
        if normalized_version.is_empty() {
            return Err(ModelDomainError::EmptyVersion);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: ModelId::new(),
            name,
            kind,
            version: normalized_version,
            description: description.into().trim().to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the model identifier.
    #[must_use]
    pub const fn id(&self) -> ModelId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &ModelName {
        &self.name
    }

    /// Returns the backend kind.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Returns the version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: ModelName, clock: &impl Clock) {
        self.name = name;
        self.updated_at = clock.utc();
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into().trim().to_owned();
        self.updated_at = clock.utc();
    }
}
