//! Lira dispatch: agent registry and concurrent model execution.
//!
//! This crate runs registered agents against model backends. Callers
//! execute one agent, or fan one input out to many agents at once and get
//! back one result per requested agent in request order. Each agent keeps
//! an execution counter that advances once per successful run, even when
//! the same agent runs many times concurrently.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   simulated backends)
//!
//! # Modules
//!
//! - [`agent_registry`]: Agent records and execution counters
//! - [`model_catalog`]: Catalog of language and quantum models
//! - [`execution`]: Single-agent and batch execution dispatch
//! - [`quantum`]: Quantum oracle backend and status probing
//! - [`config`]: Dispatcher and oracle settings

pub mod agent_registry;
pub mod config;
pub mod execution;
pub mod model_catalog;
pub mod quantum;
