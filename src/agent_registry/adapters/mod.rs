//! Adapter implementations for the agent registry port.

pub mod memory;
