//! Single-agent and batch execution dispatch.
//!
//! [`ExecutionDispatcher`] resolves agents through the registry, runs them
//! against a [`ModelExecutor`] under a per-agent deadline and advances the
//! execution counter of every agent whose run succeeded. A batch fans out
//! one tokio task per requested position and gathers the results back into
//! request order.

use crate::agent_registry::{
    domain::AgentId,
    ports::{AgentRegistry, AgentRegistryError},
};
use crate::config::DispatchConfig;
use crate::execution::{
    domain::{
        BatchExecutionResult, ExecutionInput, ExecutionRequestError, ExecutionRequestResult,
        ExecutionResult, FailureReason,
    },
    ports::ModelExecutor,
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, instrument, warn};

/// Upper bound on a single deadline, keeping `Instant` arithmetic in range.
const MAX_DEADLINE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Runs agents against their bound model backends.
pub struct ExecutionDispatcher<R, E, C>
where
    R: AgentRegistry + 'static,
    E: ModelExecutor + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    registry: Arc<R>,
    executor: Arc<E>,
    clock: Arc<C>,
    config: DispatchConfig,
}

impl<R, E, C> Clone for ExecutionDispatcher<R, E, C>
where
    R: AgentRegistry + 'static,
    E: ModelExecutor + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            executor: Arc::clone(&self.executor),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<R, E, C> ExecutionDispatcher<R, E, C>
where
    R: AgentRegistry + 'static,
    E: ModelExecutor + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(
        registry: Arc<R>,
        executor: Arc<E>,
        clock: Arc<C>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            registry,
            executor,
            clock,
            config,
        }
    }

    /// Returns the dispatcher configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Runs one agent under the configured per-agent timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionRequestError`] when the input or the agent ID is
    /// empty. Every other failure, including an ID that names no agent, is
    /// reported inside the returned [`ExecutionResult`].
    pub async fn run_agent(
        &self,
        agent_id: &str,
        input: &str,
    ) -> ExecutionRequestResult<ExecutionResult> {
        self.run_agent_within(agent_id, input, self.config.per_agent_timeout())
            .await
    }

    /// Runs one agent with an explicit deadline measured from this call.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionRequestError`] when the input or the agent ID is
    /// empty.
    #[instrument(skip(self, input))]
    pub async fn run_agent_within(
        &self,
        agent_id: &str,
        input: &str,
        timeout: Duration,
    ) -> ExecutionRequestResult<ExecutionResult> {
        let deadline = deadline_after(timeout);
        let payload = ExecutionInput::new(input)?;
        if agent_id.is_empty() {
            return Err(ExecutionRequestError::MissingAgentId);
        }
        Ok(self
            .execute_resolved(agent_id.to_owned(), payload, deadline)
            .await)
    }

    /// Runs every listed agent concurrently on the same input.
    ///
    /// Duplicated IDs run independently. The result holds one entry per
    /// requested position, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionRequestError`] when the list is empty, the input is
    /// empty, or any entry is the empty string. Nothing runs in that case.
    pub async fn run_batch<S>(
        &self,
        agent_ids: &[S],
        input: &str,
    ) -> ExecutionRequestResult<BatchExecutionResult>
    where
        S: AsRef<str>,
    {
        self.run_batch_within(agent_ids, input, self.config.per_agent_timeout())
            .await
    }

    /// Runs every listed agent concurrently, each under its own `timeout`.
    ///
    /// At most [`DispatchConfig::max_concurrency`] executions run at once;
    /// the rest wait for a free slot. Each deadline starts when that
    /// execution gets its slot. The batch as a whole waits for every task and
    /// has no deadline of its own.
    ///
    /// # Errors
    ///
    /// See [`ExecutionDispatcher::run_batch`].
    #[instrument(skip(self, agent_ids, input), fields(batch_size = agent_ids.len()))]
    pub async fn run_batch_within<S>(
        &self,
        agent_ids: &[S],
        input: &str,
        timeout: Duration,
    ) -> ExecutionRequestResult<BatchExecutionResult>
    where
        S: AsRef<str>,
    {
        if agent_ids.is_empty() {
            return Err(ExecutionRequestError::EmptyBatch);
        }
        let payload = ExecutionInput::new(input)?;
        let requested = agent_ids
            .iter()
            .enumerate()
            .map(|(position, raw)| match raw.as_ref() {
                "" => Err(ExecutionRequestError::MissingBatchAgentId { position }),
                id => Ok(id.to_owned()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let started = Instant::now();
        let limiter = Arc::new(Semaphore::new(
            self.config.max_concurrency.clamp(1, Semaphore::MAX_PERMITS),
        ));
        let mut tasks = JoinSet::new();
        for (index, agent_id) in requested.iter().cloned().enumerate() {
            let dispatcher = self.clone();
            let task_payload = payload.clone();
            let slot = Arc::clone(&limiter);
            tasks.spawn(async move {
                let Ok(_permit) = slot.acquire_owned().await else {
                    return (index, ExecutionResult::failed(agent_id, FailureReason::Aborted));
                };
                let deadline = deadline_after(timeout);
                let result = dispatcher
                    .execute_resolved(agent_id, task_payload, deadline)
                    .await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<ExecutionResult>> = vec![None; requested.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(result);
                    }
                }
                Err(err) => warn!(error = %err, "batch execution task aborted"),
            }
        }

        let results = slots
            .into_iter()
            .zip(requested)
            .map(|(slot, agent_id)| {
                slot.unwrap_or_else(|| ExecutionResult::failed(agent_id, FailureReason::Aborted))
            })
            .collect();
        let batch = BatchExecutionResult::new(results);
        info!(
            succeeded = batch.succeeded_count(),
            failed = batch.failed_count(),
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "batch execution completed"
        );
        Ok(batch)
    }

    /// Runs one non-empty requested ID. Never fails; every problem becomes a
    /// failed result tagged with `requested` as given.
    ///
    /// An ID that is not a well-formed [`AgentId`] in its exact spelling
    /// cannot name a registered agent and is reported as not found.
    async fn execute_resolved(
        &self,
        requested: String,
        input: ExecutionInput,
        deadline: Instant,
    ) -> ExecutionResult {
        let Some(id) = AgentId::new(requested.as_str())
            .ok()
            .filter(|id| id.as_str() == requested)
        else {
            debug!(agent_id = %requested, "agent id names no registered agent");
            return ExecutionResult::failed(requested, FailureReason::AgentNotFound);
        };
        let agent = match self.registry.find_by_id(&id).await {
            Ok(Some(agent)) => agent,
            Ok(None) => {
                debug!(agent_id = %id, "agent not found");
                return ExecutionResult::failed(requested, FailureReason::AgentNotFound);
            }
            Err(err) => {
                warn!(agent_id = %id, error = %err, "agent lookup failed");
                return ExecutionResult::failed(
                    requested,
                    FailureReason::Registry(err.to_string()),
                );
            }
        };
        if !agent.is_active() {
            debug!(agent_id = %id, "agent inactive");
            return ExecutionResult::failed(requested, FailureReason::AgentInactive);
        }

        let budget = deadline.saturating_duration_since(Instant::now());
        let call = self.executor.execute(agent.model_type(), &input, budget);
        let output = match timeout_at(deadline, call).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                warn!(agent_id = %id, model_type = %agent.model_type(), error = %err, "backend failed");
                return ExecutionResult::failed(requested, FailureReason::Backend(err.to_string()));
            }
            Err(_) => {
                warn!(agent_id = %id, model_type = %agent.model_type(), "execution timed out");
                return ExecutionResult::failed(requested, FailureReason::Timeout);
            }
        };

        match self.registry.increment_execution_count(&id).await {
            Ok(execution_count) => {
                debug!(agent_id = %id, execution_count, "agent execution succeeded");
                let completed_at = self.clock.utc();
                ExecutionResult::succeeded(requested, output, completed_at)
            }
            Err(AgentRegistryError::NotFound(_)) => {
                warn!(agent_id = %id, "agent vanished before its execution was counted");
                ExecutionResult::failed(requested, FailureReason::AgentNotFound)
            }
            Err(err) => {
                warn!(agent_id = %id, error = %err, "execution count update failed");
                ExecutionResult::failed(requested, FailureReason::Registry(err.to_string()))
            }
        }
    }
}

fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout)
        .unwrap_or_else(|| now + MAX_DEADLINE)
}
