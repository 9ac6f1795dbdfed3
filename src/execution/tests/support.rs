//! Shared fixtures for execution tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::agent_registry::{
    adapters::memory::InMemoryAgentRegistry,
    domain::{Agent, AgentId, AgentName, ModelType, OwnerId},
    ports::{AgentRegistry, AgentRegistryError, AgentRegistryResult},
};
use crate::execution::{
    domain::{ExecutionInput, ModelOutput},
    ports::{ModelExecutor, ModelExecutorResult},
};
use async_trait::async_trait;
use mockable::DefaultClock;

pub(super) fn agent_id(raw: &str) -> AgentId {
    AgentId::new(raw).expect("valid agent id")
}

pub(super) async fn seeded_registry(agents: &[(&str, &str)]) -> Arc<InMemoryAgentRegistry> {
    let registry = Arc::new(InMemoryAgentRegistry::new());
    register_agents(registry.as_ref(), agents).await;
    registry
}

pub(super) async fn register_agents(registry: &impl AgentRegistry, agents: &[(&str, &str)]) {
    for (id, model_type) in agents {
        let agent = Agent::new(
            agent_id(id),
            AgentName::new(format!("Agent {id}")).expect("valid name"),
            ModelType::new(*model_type).expect("valid model type"),
            OwnerId::zero(),
            &DefaultClock,
        );
        registry.register(&agent).await.expect("registration");
    }
}

pub(super) async fn deactivate(registry: &InMemoryAgentRegistry, raw: &str) {
    let mut agent = registry
        .find_by_id(&agent_id(raw))
        .await
        .expect("lookup")
        .expect("agent exists");
    agent.deactivate(&DefaultClock);
    registry.update(&agent).await.expect("update");
}

pub(super) async fn execution_count(registry: &impl AgentRegistry, raw: &str) -> u64 {
    registry
        .find_by_id(&agent_id(raw))
        .await
        .expect("lookup")
        .map_or(0, |agent| agent.execution_count())
}

/// Executor whose calls never complete.
pub(super) struct StalledExecutor;

#[async_trait]
impl ModelExecutor for StalledExecutor {
    async fn execute(
        &self,
        _model_type: &ModelType,
        _input: &ExecutionInput,
        _budget: Duration,
    ) -> ModelExecutorResult<ModelOutput> {
        std::future::pending().await
    }
}

/// Registry wrapper that can be told to fail lookups or increments.
pub(super) struct FlakyRegistry {
    inner: InMemoryAgentRegistry,
    fail_lookup: AtomicBool,
    fail_increment: AtomicBool,
}

impl FlakyRegistry {
    pub(super) const fn wrapping(inner: InMemoryAgentRegistry) -> Self {
        Self {
            inner,
            fail_lookup: AtomicBool::new(false),
            fail_increment: AtomicBool::new(false),
        }
    }

    pub(super) fn fail_lookups(&self) {
        self.fail_lookup.store(true, Ordering::SeqCst);
    }

    pub(super) fn fail_increments(&self) {
        self.fail_increment.store(true, Ordering::SeqCst);
    }
}

fn unavailable() -> AgentRegistryError {
    AgentRegistryError::persistence(std::io::Error::other("store unavailable"))
}

#[async_trait]
impl AgentRegistry for FlakyRegistry {
    async fn register(&self, agent: &Agent) -> AgentRegistryResult<()> {
        self.inner.register(agent).await
    }

    async fn update(&self, agent: &Agent) -> AgentRegistryResult<()> {
        self.inner.update(agent).await
    }

    async fn find_by_id(&self, id: &AgentId) -> AgentRegistryResult<Option<Agent>> {
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.inner.find_by_id(id).await
    }

    async fn list_active(&self) -> AgentRegistryResult<Vec<Agent>> {
        self.inner.list_active().await
    }

    async fn list_all(&self) -> AgentRegistryResult<Vec<Agent>> {
        self.inner.list_all().await
    }

    async fn increment_execution_count(&self, id: &AgentId) -> AgentRegistryResult<u64> {
        if self.fail_increment.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.inner.increment_execution_count(id).await
    }
}
