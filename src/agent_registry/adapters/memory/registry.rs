//! In-memory agent registry with per-agent atomic execution counters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::agent_registry::{
    domain::{Agent, AgentId, AgentStatus},
    ports::{AgentRegistry, AgentRegistryError, AgentRegistryResult},
};

/// Thread-safe in-memory agent registry.
///
/// Records live behind a map-level lock that is only taken for writing when
/// agents are registered or updated. Execution counters are per-agent atomics
/// advanced under the read lock, so concurrent executions never contend on
/// the map and increments of the same agent are never lost.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentRegistry {
    state: Arc<RwLock<HashMap<AgentId, AgentEntry>>>,
}

#[derive(Debug)]
struct AgentEntry {
    record: Agent,
    execution_count: AtomicU64,
}

impl AgentEntry {
    fn snapshot(&self) -> Agent {
        self.record
            .clone()
            .with_execution_count(self.execution_count.load(Ordering::Acquire))
    }
}

fn lock_error(err: impl ToString) -> AgentRegistryError {
    AgentRegistryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryAgentRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentRegistry for InMemoryAgentRegistry {
    async fn register(&self, agent: &Agent) -> AgentRegistryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.contains_key(agent.id()) {
            return Err(AgentRegistryError::DuplicateAgent(agent.id().clone()));
        }

        state.insert(
            agent.id().clone(),
            AgentEntry {
                record: agent.clone(),
                execution_count: AtomicU64::new(agent.execution_count()),
            },
        );
        Ok(())
    }

    async fn update(&self, agent: &Agent) -> AgentRegistryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let entry = state
            .get_mut(agent.id())
            .ok_or_else(|| AgentRegistryError::NotFound(agent.id().clone()))?;
        entry.record = agent.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &AgentId) -> AgentRegistryResult<Option<Agent>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(id).map(AgentEntry::snapshot))
    }

    async fn list_active(&self) -> AgentRegistryResult<Vec<Agent>> {
        let state = self.state.read().map_err(lock_error)?;
        let active = state
            .values()
            .filter(|entry| entry.record.status() == AgentStatus::Active)
            .map(AgentEntry::snapshot)
            .collect();
        Ok(active)
    }

    async fn list_all(&self) -> AgentRegistryResult<Vec<Agent>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().map(AgentEntry::snapshot).collect())
    }

    async fn increment_execution_count(&self, id: &AgentId) -> AgentRegistryResult<u64> {
        let state = self.state.read().map_err(lock_error)?;
        let entry = state
            .get(id)
            .ok_or_else(|| AgentRegistryError::NotFound(id.clone()))?;
        let previous = entry.execution_count.fetch_add(1, Ordering::AcqRel);
        Ok(previous.saturating_add(1))
    }
}
