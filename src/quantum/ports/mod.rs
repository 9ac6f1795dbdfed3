//! Ports for quantum oracle status.

mod probe;

#[cfg(test)]
pub use probe::MockQuantumStatusProbe;
pub use probe::{QuantumProbeError, QuantumProbeResult, QuantumStatusProbe};
