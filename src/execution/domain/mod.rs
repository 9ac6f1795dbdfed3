//! Domain model for agent execution requests and results.

mod batch;
mod confidence;
mod error;
mod input;
mod output;
mod result;

pub use batch::BatchExecutionResult;
pub use confidence::Confidence;
pub use error::{ExecutionDomainError, ExecutionRequestError, ExecutionRequestResult};
pub use input::ExecutionInput;
pub use output::{BackendTelemetry, ModelOutput};
pub use result::{ExecutionOutcome, ExecutionResult, FailureReason};
