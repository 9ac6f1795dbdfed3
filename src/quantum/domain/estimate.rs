//! Execution time estimates for quantum jobs.

use std::time::Duration;

const MILLIS_PER_LOG_UNIT: f64 = 50.0;

/// Estimates how long a job of the given complexity takes.
///
/// The estimate grows with the natural logarithm of the complexity:
/// `ln(complexity) * 50` milliseconds. Complexities of zero or one
/// estimate to zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the estimate is a logarithmic curve over the complexity"
)]
pub fn estimate_execution_time(complexity: u32) -> Duration {
    if complexity <= 1 {
        return Duration::ZERO;
    }
    let millis = f64::from(complexity).ln() * MILLIS_PER_LOG_UNIT;
    Duration::from_secs_f64(millis / 1_000.0)
}
