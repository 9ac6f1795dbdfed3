//! Agent aggregate root.

use super::{AgentId, AgentName, AgentStatus, ModelType, OwnerId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered agent aggregate root.
///
/// The execution counter on an `Agent` value is a snapshot taken when the
/// record was read. The registry owns the live counter and is the only
/// component allowed to advance it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: AgentName,
    model_type: ModelType,
    owner: OwnerId,
    status: AgentStatus,
    execution_count: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAgentData {
    /// Persisted agent identifier.
    pub id: AgentId,
    /// Persisted display name.
    pub name: AgentName,
    /// Persisted model binding.
    pub model_type: ModelType,
    /// Persisted owning principal.
    pub owner: OwnerId,
    /// Persisted activation status.
    pub status: AgentStatus,
    /// Persisted execution counter.
    pub execution_count: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    /// Creates a new, active agent with a zero execution counter.
    #[must_use]
    pub fn new(
        id: AgentId,
        name: AgentName,
        model_type: ModelType,
        owner: OwnerId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name,
            model_type,
            owner,
            status: AgentStatus::Active,
            execution_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an agent from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAgentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            model_type: data.model_type,
            owner: data.owner,
            status: data.status,
            execution_count: data.execution_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns a copy of this snapshot carrying the given counter value.
    ///
    /// Repository adapters use this when the live counter is stored apart
    /// from the rest of the record.
    #[must_use]
    pub fn with_execution_count(mut self, execution_count: u64) -> Self {
        self.execution_count = execution_count;
        self
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &AgentName {
        &self.name
    }

    /// Returns the bound model type.
    #[must_use]
    pub const fn model_type(&self) -> &ModelType {
        &self.model_type
    }

    /// Returns the owning principal.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the activation status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns whether the agent accepts executions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, AgentStatus::Active)
    }

    /// Returns the execution counter snapshot.
    #[must_use]
    pub const fn execution_count(&self) -> u64 {
        self.execution_count
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

    /// Activates the agent.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.status = AgentStatus::Active;
        self.touch(clock);
    }

    /// Deactivates the agent.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.status = AgentStatus::Inactive;
        self.touch(clock);
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: AgentName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Binds the agent to a different model type.
    pub fn rebind_model(&mut self, model_type: ModelType, clock: &impl Clock) {
        self.model_type = model_type;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
