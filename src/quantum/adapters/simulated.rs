//! In-process quantum oracle simulation.

use crate::agent_registry::domain::ModelType;
use crate::config::{ConfigError, ConfigResult, QuantumOracleConfig};
use crate::execution::{
    domain::{BackendTelemetry, Confidence, ExecutionInput, ModelOutput},
    ports::{ModelExecutor, ModelExecutorError, ModelExecutorResult},
};
use crate::quantum::{
    domain::{DEGRADED_UPTIME_THRESHOLD, OracleState, QuantumStatus},
    ports::{QuantumProbeResult, QuantumStatusProbe},
};
use async_trait::async_trait;
use mockable::Clock;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::debug;

/// Lowest confidence the oracle reports, in basis points.
const MIN_CONFIDENCE_BPS: u64 = 8_500;
/// Number of distinct confidence steps above the minimum (0.85 to 0.99).
const CONFIDENCE_STEPS: u64 = 1_401;

/// Quantum backend that reserves qubits per prediction.
///
/// Predictions are deterministic per input: confidence and latency are
/// derived from a SHA-256 digest of the payload. At most
/// [`QuantumOracleConfig::job_capacity`] predictions hold qubits at once;
/// further predictions queue until a slot frees. Status snapshots reflect
/// these in-flight predictions live.
pub struct SimulatedQuantumOracle<C>
where
    C: Clock + Send + Sync,
{
    config: QuantumOracleConfig,
    slots: Semaphore,
    capacity: u32,
    in_flight: AtomicU32,
    online: AtomicBool,
    clock: Arc<C>,
}

impl<C> SimulatedQuantumOracle<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an online oracle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] when `config` leaves no room for a
    /// single job or reports an uptime outside `[0, 1]`.
    pub fn new(config: QuantumOracleConfig, clock: Arc<C>) -> ConfigResult<Self> {
        let checked = config.validate()?;
        let capacity = checked.job_capacity();
        Ok(Self {
            slots: Semaphore::new(usize::try_from(capacity).unwrap_or_default()),
            capacity,
            config: checked,
            in_flight: AtomicU32::new(0),
            online: AtomicBool::new(true),
            clock,
        })
    }

    /// Returns the oracle configuration.
    #[must_use]
    pub const fn config(&self) -> &QuantumOracleConfig {
        &self.config
    }

    /// Marks the oracle offline. New predictions fail as unavailable.
    pub fn take_offline(&self) {
        self.online.store(false, Ordering::Release);
    }

    /// Marks the oracle online again.
    pub fn bring_online(&self) {
        self.online.store(true, Ordering::Release);
    }

    /// Returns whether the oracle accepts predictions.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    fn active_jobs(&self) -> u32 {
        let free = u32::try_from(self.slots.available_permits()).unwrap_or(self.capacity);
        self.capacity.saturating_sub(free)
    }

    fn latency_for(&self, digest: &[u8]) -> Duration {
        let jitter = digest_word(digest.iter().skip(8))
            .checked_rem(self.config.latency_jitter_ms.saturating_add(1))
            .unwrap_or_default();
        Duration::from_millis(self.config.base_latency_ms.saturating_add(jitter))
    }
}

#[async_trait]
impl<C> ModelExecutor for SimulatedQuantumOracle<C>
where
    C: Clock + Send + Sync,
{
    async fn execute(
        &self,
        model_type: &ModelType,
        input: &ExecutionInput,
        _budget: Duration,
    ) -> ModelExecutorResult<ModelOutput> {
        if !self.is_online() {
            return Err(ModelExecutorError::Unavailable(
                "quantum oracle is offline".to_owned(),
            ));
        }
        let _queued = InFlightGuard::enter(&self.in_flight);
        let _slot = self
            .slots
            .acquire()
            .await
            .map_err(|_| ModelExecutorError::Unavailable("quantum oracle is shut down".to_owned()))?;

        let digest = Sha256::digest(input.as_str().as_bytes());
        let latency = self.latency_for(&digest);
        debug!(model_type = %model_type, latency = ?latency, "quantum prediction started");
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let telemetry = BackendTelemetry {
            qubits: Some(self.config.qubits_per_job),
            execution_time_ms: u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        };
        Ok(ModelOutput::new(
            format!("Quantum prediction for: {input}"),
            confidence_for(&digest),
        )
        .with_telemetry(telemetry))
    }
}

#[async_trait]
impl<C> QuantumStatusProbe for SimulatedQuantumOracle<C>
where
    C: Clock + Send + Sync,
{
    async fn status(&self) -> QuantumProbeResult<QuantumStatus> {
        let checked_at = self.clock.utc();
        if !self.is_online() {
            return Ok(QuantumStatus::down(checked_at));
        }
        let active_jobs = self.active_jobs();
        let reserved = active_jobs.saturating_mul(self.config.qubits_per_job);
        let at_capacity = active_jobs >= self.capacity;
        let state = if at_capacity || self.config.uptime_fraction < DEGRADED_UPTIME_THRESHOLD {
            OracleState::Degraded
        } else {
            OracleState::Operational
        };
        Ok(QuantumStatus::new(
            state,
            self.config.total_qubits.saturating_sub(reserved),
            self.in_flight.load(Ordering::Acquire),
            active_jobs,
            self.config.uptime_fraction,
            checked_at,
        ))
    }
}

/// Counts a prediction as in flight until dropped, including when the
/// caller abandons it at a deadline.
struct InFlightGuard<'a>(&'a AtomicU32);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicU32) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

fn digest_word<'a>(bytes: impl Iterator<Item = &'a u8>) -> u64 {
    bytes
        .take(8)
        .fold(0_u64, |word, byte| (word << 8) | u64::from(*byte))
}

#[expect(
    clippy::float_arithmetic,
    reason = "basis points are scaled into the unit interval"
)]
fn confidence_for(digest: &[u8]) -> Confidence {
    let offset = digest_word(digest.iter())
        .checked_rem(CONFIDENCE_STEPS)
        .unwrap_or_default();
    let basis_points = u32::try_from(MIN_CONFIDENCE_BPS.saturating_add(offset)).unwrap_or_default();
    Confidence::saturating(f64::from(basis_points) / 10_000.0)
}
