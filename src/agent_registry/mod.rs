//! Agent registration, lookup and execution accounting.
//!
//! The registry is the store the execution dispatcher consults for agent
//! records. It owns the per-agent execution counter, which is the only
//! state mutated by concurrent executions. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
