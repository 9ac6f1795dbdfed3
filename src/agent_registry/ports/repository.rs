//! Repository port for agent persistence, lookup and execution counting.

use crate::agent_registry::domain::{Agent, AgentId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent registry operations.
pub type AgentRegistryResult<T> = Result<T, AgentRegistryError>;

/// Agent registry persistence contract.
#[async_trait]
pub trait AgentRegistry: Send + Sync {
    /// Stores a new agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::DuplicateAgent`] when the identifier is
    /// already registered.
    async fn register(&self, agent: &Agent) -> AgentRegistryResult<()>;

    /// Persists changes to an existing agent (name, model binding, status,
    /// timestamps).
    ///
    /// The execution counter carried by `agent` is ignored; it only moves
    /// through [`AgentRegistry::increment_execution_count`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::NotFound`] when the agent does not exist.
    async fn update(&self, agent: &Agent) -> AgentRegistryResult<()>;

    /// Finds an agent by identifier.
    ///
    /// Returns `None` when the agent does not exist.
    async fn find_by_id(&self, id: &AgentId) -> AgentRegistryResult<Option<Agent>>;

    /// Returns all agents with `Active` status.
    async fn list_active(&self) -> AgentRegistryResult<Vec<Agent>>;

    /// Returns all agents regardless of status.
    async fn list_all(&self) -> AgentRegistryResult<Vec<Agent>>;

    /// Atomically advances the agent's execution counter by one and returns
    /// the new value.
    ///
    /// Concurrent increments of the same agent must all be reflected.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::NotFound`] when the agent does not exist.
    async fn increment_execution_count(&self, id: &AgentId) -> AgentRegistryResult<u64>;
}

/// Errors returned by agent registry implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentRegistryError {
    /// An agent with the same identifier already exists.
    #[error("duplicate agent identifier: {0}")]
    DuplicateAgent(AgentId),

    /// The agent was not found.
    #[error("agent not found: {0}")]
    NotFound(AgentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentRegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
