//! Unit tests for the quantum module.
