//! Status probe port.

use crate::quantum::domain::QuantumStatus;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for probe calls.
pub type QuantumProbeResult<T> = Result<T, QuantumProbeError>;

/// Source of oracle status snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuantumStatusProbe: Send + Sync {
    /// Reads the current oracle status.
    ///
    /// # Errors
    ///
    /// Returns [`QuantumProbeError`] when the oracle cannot be reached.
    async fn status(&self) -> QuantumProbeResult<QuantumStatus>;
}

/// Errors raised while probing the oracle.
#[derive(Debug, Clone, Error)]
pub enum QuantumProbeError {
    /// The oracle did not answer.
    #[error("quantum oracle unreachable: {0}")]
    Unreachable(String),

    /// The probe transport failed.
    #[error("quantum probe failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl QuantumProbeError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
