//! Port contracts for agent registration and execution accounting.
//!
//! Ports define infrastructure-agnostic interfaces used by the registry
//! service and the execution dispatcher.

pub mod repository;

pub use repository::{AgentRegistry, AgentRegistryError, AgentRegistryResult};
