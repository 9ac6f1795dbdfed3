//! Domain model for quantum oracle status.

mod estimate;
mod status;

pub use estimate::estimate_execution_time;
pub use status::{DEGRADED_UPTIME_THRESHOLD, OracleState, QuantumStatus};
