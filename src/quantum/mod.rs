//! Quantum oracle backend and health probing.
//!
//! The oracle is a model backend that reserves a block of qubits per
//! prediction. Besides serving predictions it reports a live status
//! (available qubits, queue depth and uptime) which callers read through
//! [`services::QuantumProbeService`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
