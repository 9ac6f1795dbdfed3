//! Per-agent execution results.

use super::{BackendTelemetry, Confidence, ModelOutput};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a single execution did not succeed.
///
/// The `Display` form is the `reason` text reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// No agent is registered under the requested ID.
    #[error("agent not found")]
    AgentNotFound,
    /// The agent exists but is deactivated.
    #[error("agent inactive")]
    AgentInactive,
    /// The backend did not answer before the deadline.
    #[error("timeout")]
    Timeout,
    /// The backend reported a failure.
    #[error("{0}")]
    Backend(String),
    /// The registry could not be read or updated.
    #[error("registry error: {0}")]
    Registry(String),
    /// The execution task stopped before producing a result.
    #[error("execution aborted")]
    Aborted,
}

impl Serialize for FailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Terminal state of one execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    /// The backend produced output and the execution was counted.
    Succeeded {
        /// Backend output text.
        output: String,
        /// Backend confidence score.
        confidence: Confidence,
        /// Completion time.
        timestamp: DateTime<Utc>,
        /// Engine telemetry, when the backend reports it.
        #[serde(skip_serializing_if = "Option::is_none")]
        telemetry: Option<BackendTelemetry>,
    },
    /// The execution did not succeed.
    Failed {
        /// Failure description.
        reason: FailureReason,
    },
}

/// Outcome of running one agent, tagged with the agent ID exactly as the
/// caller spelled it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    agent_id: String,
    #[serde(flatten)]
    outcome: ExecutionOutcome,
}

impl ExecutionResult {
    /// Creates a succeeded result completed at `timestamp`.
    #[must_use]
    pub fn succeeded(
        agent_id: impl Into<String>,
        output: ModelOutput,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let (text, confidence, telemetry) = output.into_parts();
        Self {
            agent_id: agent_id.into(),
            outcome: ExecutionOutcome::Succeeded {
                output: text,
                confidence,
                timestamp,
                telemetry,
            },
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failed(agent_id: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            agent_id: agent_id.into(),
            outcome: ExecutionOutcome::Failed { reason },
        }
    }

    /// Returns the agent ID this result answers.
    #[must_use]
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Returns the terminal state.
    #[must_use]
    pub const fn outcome(&self) -> &ExecutionOutcome {
        &self.outcome
    }

    /// Returns whether the execution succeeded.
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self.outcome, ExecutionOutcome::Succeeded { .. })
    }

    /// Returns the output text of a succeeded execution.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match &self.outcome {
            ExecutionOutcome::Succeeded { output, .. } => Some(output),
            ExecutionOutcome::Failed { .. } => None,
        }
    }

    /// Returns the confidence of a succeeded execution.
    #[must_use]
    pub const fn confidence(&self) -> Option<Confidence> {
        match &self.outcome {
            ExecutionOutcome::Succeeded { confidence, .. } => Some(*confidence),
            ExecutionOutcome::Failed { .. } => None,
        }
    }

    /// Returns the completion time of a succeeded execution.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        match &self.outcome {
            ExecutionOutcome::Succeeded { timestamp, .. } => Some(*timestamp),
            ExecutionOutcome::Failed { .. } => None,
        }
    }

    /// Returns the telemetry of a succeeded execution, if reported.
    #[must_use]
    pub const fn telemetry(&self) -> Option<BackendTelemetry> {
        match &self.outcome {
            ExecutionOutcome::Succeeded { telemetry, .. } => *telemetry,
            ExecutionOutcome::Failed { .. } => None,
        }
    }

    /// Returns the failure reason of a failed execution.
    #[must_use]
    pub const fn failure_reason(&self) -> Option<&FailureReason> {
        match &self.outcome {
            ExecutionOutcome::Succeeded { .. } => None,
            ExecutionOutcome::Failed { reason } => Some(reason),
        }
    }
}
