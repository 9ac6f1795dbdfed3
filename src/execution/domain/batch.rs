//! Ordered results of a batch execution.

use super::ExecutionResult;
use serde::Serialize;

/// One result per requested agent ID, in request order.
///
/// `results()[i]` always answers the `i`th requested ID, whether that
/// execution succeeded or failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchExecutionResult(Vec<ExecutionResult>);

impl BatchExecutionResult {
    /// Wraps results already arranged in request order.
    #[must_use]
    pub const fn new(results: Vec<ExecutionResult>) -> Self {
        Self(results)
    }

    /// Returns the results in request order.
    #[must_use]
    pub fn results(&self) -> &[ExecutionResult] {
        &self.0
    }

    /// Returns the result at a request position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ExecutionResult> {
        self.0.get(position)
    }

    /// Returns the number of results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the batch holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the results in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionResult> {
        self.0.iter()
    }

    /// Counts succeeded executions.
    #[must_use]
    pub fn succeeded_count(&self) -> usize {
        self.0.iter().filter(|result| result.is_succeeded()).count()
    }

    /// Counts failed executions.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.len().saturating_sub(self.succeeded_count())
    }

    /// Unwraps the ordered results.
    #[must_use]
    pub fn into_inner(self) -> Vec<ExecutionResult> {
        self.0
    }
}

impl<'a> IntoIterator for &'a BatchExecutionResult {
    type Item = &'a ExecutionResult;
    type IntoIter = std::slice::Iter<'a, ExecutionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for BatchExecutionResult {
    type Item = ExecutionResult;
    type IntoIter = std::vec::IntoIter<ExecutionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
