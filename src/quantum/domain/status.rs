//! Oracle status snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uptime below which an otherwise healthy oracle reports itself degraded.
pub const DEGRADED_UPTIME_THRESHOLD: f64 = 0.99;

/// Coarse health of the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleState {
    /// Accepting jobs with spare capacity.
    Operational,
    /// Reachable but at capacity or with reduced uptime.
    Degraded,
    /// Offline or unreachable.
    Down,
}

impl OracleState {
    /// Returns the lowercase state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for OracleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time oracle status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumStatus {
    state: OracleState,
    available_units: u32,
    queue_depth: u32,
    active_jobs: u32,
    uptime_fraction: f64,
    checked_at: DateTime<Utc>,
}

impl QuantumStatus {
    /// Creates a status snapshot.
    #[must_use]
    pub const fn new(
        state: OracleState,
        available_units: u32,
        queue_depth: u32,
        active_jobs: u32,
        uptime_fraction: f64,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            state,
            available_units,
            queue_depth,
            active_jobs,
            uptime_fraction,
            checked_at,
        }
    }

    /// Status reported when the oracle is offline or cannot be reached.
    #[must_use]
    pub const fn down(checked_at: DateTime<Utc>) -> Self {
        Self::new(OracleState::Down, 0, 0, 0, 0.0, checked_at)
    }

    /// Returns the coarse health state.
    #[must_use]
    pub const fn state(&self) -> OracleState {
        self.state
    }

    /// Returns the qubits not reserved by running jobs.
    #[must_use]
    pub const fn available_units(&self) -> u32 {
        self.available_units
    }

    /// Returns the number of predictions submitted and not yet finished.
    #[must_use]
    pub const fn queue_depth(&self) -> u32 {
        self.queue_depth
    }

    /// Returns the number of predictions currently holding qubits.
    #[must_use]
    pub const fn active_jobs(&self) -> u32 {
        self.active_jobs
    }

    /// Returns the reported uptime fraction.
    #[must_use]
    pub const fn uptime_fraction(&self) -> f64 {
        self.uptime_fraction
    }

    /// Returns when the status was taken.
    #[must_use]
    pub const fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    /// Returns whether the oracle can accept jobs.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self.state, OracleState::Down)
    }
}
