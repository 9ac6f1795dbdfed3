//! Infallible oracle health probing.

use crate::quantum::{
    domain::QuantumStatus,
    ports::QuantumStatusProbe,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reads oracle status, reporting an unreachable oracle as down.
pub struct QuantumProbeService<P, C>
where
    P: QuantumStatusProbe + ?Sized,
    C: Clock + Send + Sync,
{
    probe: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> Clone for QuantumProbeService<P, C>
where
    P: QuantumStatusProbe + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            probe: Arc::clone(&self.probe),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, C> QuantumProbeService<P, C>
where
    P: QuantumStatusProbe + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a probe service.
    #[must_use]
    pub const fn new(probe: Arc<P>, clock: Arc<C>) -> Self {
        Self { probe, clock }
    }

    /// Returns the current oracle status.
    ///
    /// Probe failures are reported as a `down` status with no available
    /// units rather than as an error.
    pub async fn probe(&self) -> QuantumStatus {
        match self.probe.status().await {
            Ok(status) => {
                debug!(
                    state = %status.state(),
                    available_units = status.available_units(),
                    queue_depth = status.queue_depth(),
                    "quantum oracle probed"
                );
                status
            }
            Err(err) => {
                warn!(error = %err, "quantum oracle probe failed");
                QuantumStatus::down(self.clock.utc())
            }
        }
    }
}
