//! Quantum oracle services.

mod probe;

pub use probe::QuantumProbeService;
