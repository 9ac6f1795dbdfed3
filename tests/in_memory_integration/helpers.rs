//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use lira_dispatch::{
    agent_registry::{
        adapters::memory::InMemoryAgentRegistry,
        services::{AgentRegistryService, RegisterAgentRequest},
    },
    config::{DispatchConfig, QuantumOracleConfig},
    execution::{
        adapters::{BackendRouter, SimulatedLanguageBackend},
        ports::ModelExecutor,
        services::ExecutionDispatcher,
    },
    model_catalog::{
        adapters::memory::InMemoryModelCatalog,
        domain::BackendKind,
        services::{ModelCatalogService, RegisterModelRequest},
    },
    quantum::adapters::SimulatedQuantumOracle,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Language model name used across tests.
pub const LANGUAGE_MODEL: &str = "GPT-4";
/// Quantum model name used across tests.
pub const QUANTUM_MODEL: &str = "Quantum-Oracle";

/// Dispatcher type wired to the catalog-driven router.
pub type TestDispatcher = ExecutionDispatcher<InMemoryAgentRegistry, BackendRouter, DefaultClock>;

/// Fully wired in-memory system.
pub struct Harness {
    /// Shared agent store.
    pub registry: Arc<InMemoryAgentRegistry>,
    /// Agent registration service over `registry`.
    pub agents: AgentRegistryService<InMemoryAgentRegistry, DefaultClock>,
    /// Model catalog service.
    pub catalog: ModelCatalogService<InMemoryModelCatalog, DefaultClock>,
    /// Quantum backend, shared with the router.
    pub oracle: Arc<SimulatedQuantumOracle<DefaultClock>>,
}

impl Harness {
    /// Creates a harness whose oracle uses `oracle_config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `oracle_config` is rejected by the oracle.
    pub fn with_oracle(oracle_config: QuantumOracleConfig) -> eyre::Result<Self> {
        let registry = Arc::new(InMemoryAgentRegistry::new());
        let clock = Arc::new(DefaultClock);
        let oracle = SimulatedQuantumOracle::new(oracle_config, Arc::clone(&clock))?;
        Ok(Self {
            agents: AgentRegistryService::new(Arc::clone(&registry), Arc::clone(&clock)),
            catalog: ModelCatalogService::new(
                Arc::new(InMemoryModelCatalog::new()),
                Arc::clone(&clock),
            ),
            oracle: Arc::new(oracle),
            registry,
        })
    }

    /// Registers the language and quantum models in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog registration fails.
    pub async fn seed_catalog(&self) -> eyre::Result<()> {
        self.catalog
            .register(RegisterModelRequest::new(LANGUAGE_MODEL, "language"))
            .await?;
        self.catalog
            .register(
                RegisterModelRequest::new(QUANTUM_MODEL, "quantum")
                    .with_description("256-qubit oracle"),
            )
            .await?;
        Ok(())
    }

    /// Registers an agent with a caller-chosen ID.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn register_agent(&self, id: &str, model: &str) -> eyre::Result<()> {
        self.agents
            .register(RegisterAgentRequest::new(format!("Agent {id}"), model).with_id(id))
            .await?;
        Ok(())
    }

    /// Builds a dispatcher routing by the current catalog contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be listed.
    pub async fn dispatcher(&self, config: DispatchConfig) -> eyre::Result<TestDispatcher> {
        let models = self.catalog.list_all().await?;
        let oracle: Arc<dyn ModelExecutor> = self.oracle.clone();
        let router = BackendRouter::new()
            .with_backend(BackendKind::Language, Arc::new(SimulatedLanguageBackend::new()))
            .with_backend(BackendKind::Quantum, oracle)
            .bind_models(&models)?;
        Ok(ExecutionDispatcher::new(
            Arc::clone(&self.registry),
            Arc::new(router),
            Arc::new(DefaultClock),
            config,
        ))
    }

    /// Returns an agent's execution counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent is missing or the lookup fails.
    pub async fn execution_count(&self, id: &str) -> eyre::Result<u64> {
        let agent = self
            .agents
            .find_by_id(id)
            .await?
            .ok_or_else(|| eyre::eyre!("agent {id} is not registered"))?;
        Ok(agent.execution_count())
    }
}

/// Provides a harness with an instant oracle.
#[fixture]
pub fn harness() -> eyre::Result<Harness> {
    Harness::with_oracle(QuantumOracleConfig::default().without_latency())
}
