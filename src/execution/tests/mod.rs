//! Unit tests for the execution module.

mod support;
