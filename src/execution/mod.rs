//! Agent execution dispatch.
//!
//! This module runs agents against caller-supplied input. A single execution
//! resolves the agent through the registry, invokes the model executor bound
//! to the agent's model type under a deadline, and records successful runs in
//! the agent's execution counter. Batch execution fans one input out to many
//! agents concurrently and returns one result per requested ID, in request
//! order, whatever the individual outcomes.
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
