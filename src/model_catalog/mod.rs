//! Catalog of prediction models agents can be bound to.
//!
//! Each model carries a backend kind (`language` or `quantum`) that the
//! execution layer uses to route agent executions. The module follows
//! hexagonal architecture:
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
