//! Confidence score attached to model output.

use super::ExecutionDomainError;
use serde::{Serialize, Serializer};

/// Confidence in `[0, 1]` reported by a backend for its output.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Creates a confidence score.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionDomainError::ConfidenceOutOfRange`] when the value
    /// is not finite or lies outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ExecutionDomainError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ExecutionDomainError::ConfidenceOutOfRange(value))
        }
    }

    /// Creates a confidence score, clamping the value into `[0, 1]`.
    ///
    /// Non-finite values map to zero.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Returns the score as a float.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}
