//! Service layer for agent registration, discovery and activation.
//!
//! Provides [`AgentRegistryService`] which validates caller input and
//! coordinates registry writes. Execution accounting is not exposed here;
//! the dispatcher advances counters through the registry port directly.

use crate::agent_registry::{
    domain::{Agent, AgentDomainError, AgentId, AgentName, ModelType, OwnerId},
    ports::{AgentRegistry, AgentRegistryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAgentRequest {
    id: Option<String>,
    name: String,
    model_type: String,
    owner: Option<String>,
}

impl RegisterAgentRequest {
    /// Creates a request with the required name and model binding.
    #[must_use]
    pub fn new(name: impl Into<String>, model_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            model_type: model_type.into(),
            owner: None,
        }
    }

    /// Uses a caller-chosen identifier instead of a generated one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the owning principal. Defaults to the zero address.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Partial update for an existing agent.
///
/// Fields left as `None` are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentPatch {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement model binding.
    pub model_type: Option<String>,
}

impl AgentPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement model binding.
    #[must_use]
    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }
}

/// Service-level errors for agent registry operations.
#[derive(Debug, Error)]
pub enum AgentRegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AgentDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AgentRegistryError),
}

/// Result type for agent registry service operations.
pub type AgentRegistryServiceResult<T> = Result<T, AgentRegistryServiceError>;

/// Agent registration and discovery orchestration service.
#[derive(Clone)]
pub struct AgentRegistryService<R, C>
where
    R: AgentRegistry,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AgentRegistryService<R, C>
where
    R: AgentRegistry,
    C: Clock + Send + Sync,
{
    /// Creates a new agent registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new, active agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError`] when input validation fails or
    /// the repository rejects persistence.
    pub async fn register(&self, request: RegisterAgentRequest) -> AgentRegistryServiceResult<Agent> {
        let RegisterAgentRequest {
            id,
            name,
            model_type,
            owner,
        } = request;

        let agent_id = id.map_or_else(|| Ok(AgentId::generate()), AgentId::new)?;
        let agent_name = AgentName::new(name)?;
        let bound_model = ModelType::new(model_type)?;
        let owner_id = owner.map_or_else(|| Ok(OwnerId::zero()), OwnerId::new)?;

        let agent = Agent::new(agent_id, agent_name, bound_model, owner_id, &*self.clock);
        self.repository.register(&agent).await?;
        Ok(agent)
    }

    /// Finds an agent by identifier.
    ///
    /// Returns `Ok(None)` when no agent has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError::Domain`] when the identifier is
    /// malformed, or [`AgentRegistryServiceError::Repository`] when the
    /// lookup fails.
    pub async fn find_by_id(&self, id: &str) -> AgentRegistryServiceResult<Option<Agent>> {
        let agent_id = AgentId::new(id)?;
        Ok(self.repository.find_by_id(&agent_id).await?)
    }

    /// Returns all agents with `Active` status.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError::Repository`] when the lookup fails.
    pub async fn list_active(&self) -> AgentRegistryServiceResult<Vec<Agent>> {
        Ok(self.repository.list_active().await?)
    }

    /// Returns all agents regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> AgentRegistryServiceResult<Vec<Agent>> {
        Ok(self.repository.list_all().await?)
    }

    /// Applies a partial update to an agent.
    ///
    /// The patch is validated in full before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError::Domain`] when a patched value is
    /// invalid, or [`AgentRegistryServiceError::Repository`] when the agent is
    /// not found or persistence fails.
    pub async fn update(&self, id: &str, patch: AgentPatch) -> AgentRegistryServiceResult<Agent> {
        let new_name = patch.name.map(AgentName::new).transpose()?;
        let new_model = patch.model_type.map(ModelType::new).transpose()?;

        let mut agent = self.find_or_error(id).await?;
        if let Some(name) = new_name {
            agent.rename(name, &*self.clock);
        }
        if let Some(model_type) = new_model {
            agent.rebind_model(model_type, &*self.clock);
        }
        self.repository.update(&agent).await?;
        Ok(agent)
    }

    /// Activates an agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError`] when the identifier is malformed,
    /// the agent is not found, or persistence fails.
    pub async fn activate(&self, id: &str) -> AgentRegistryServiceResult<Agent> {
        let mut agent = self.find_or_error(id).await?;
        agent.activate(&*self.clock);
        self.repository.update(&agent).await?;
        Ok(agent)
    }

    /// Deactivates an agent. Subsequent executions fail with `agent inactive`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryServiceError`] when the identifier is malformed,
    /// the agent is not found, or persistence fails.
    pub async fn deactivate(&self, id: &str) -> AgentRegistryServiceResult<Agent> {
        let mut agent = self.find_or_error(id).await?;
        agent.deactivate(&*self.clock);
        self.repository.update(&agent).await?;
        Ok(agent)
    }

    async fn find_or_error(&self, id: &str) -> AgentRegistryServiceResult<Agent> {
        let agent_id = AgentId::new(id)?;
        self.repository
            .find_by_id(&agent_id)
            .await?
            .ok_or_else(|| AgentRegistryError::NotFound(agent_id).into())
    }
}
