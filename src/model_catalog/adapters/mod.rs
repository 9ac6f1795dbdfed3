//! Adapter implementations for the model catalog port.

pub mod memory;
