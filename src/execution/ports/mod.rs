//! Ports for model execution backends.

mod executor;

#[cfg(test)]
pub use executor::MockModelExecutor;
pub use executor::{ModelExecutor, ModelExecutorError, ModelExecutorResult};
