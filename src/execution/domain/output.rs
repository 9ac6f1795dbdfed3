//! Output produced by a model backend.

use super::Confidence;
use serde::Serialize;

/// Engine telemetry reported alongside an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendTelemetry {
    /// Qubits the prediction reserved, for quantum backends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qubits: Option<u32>,
    /// Time the backend spent producing the output.
    pub execution_time_ms: u64,
}

/// Successful backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    text: String,
    confidence: Confidence,
    telemetry: Option<BackendTelemetry>,
}

impl ModelOutput {
    /// Creates an output without telemetry.
    #[must_use]
    pub fn new(text: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            text: text.into(),
            confidence,
            telemetry: None,
        }
    }

    /// Attaches engine telemetry.
    #[must_use]
    pub const fn with_telemetry(mut self, telemetry: BackendTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Returns the output text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the confidence score.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Returns engine telemetry, if the backend reported any.
    #[must_use]
    pub const fn telemetry(&self) -> Option<BackendTelemetry> {
        self.telemetry
    }

    /// Splits the output into its parts.
    #[must_use]
    pub fn into_parts(self) -> (String, Confidence, Option<BackendTelemetry>) {
        (self.text, self.confidence, self.telemetry)
    }
}
