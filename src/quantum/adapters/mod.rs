//! Quantum oracle adapters.

mod simulated;

pub use simulated::SimulatedQuantumOracle;
