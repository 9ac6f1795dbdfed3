//! Unit tests for the model catalog module.
