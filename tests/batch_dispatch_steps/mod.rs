//! Step definitions for batch dispatch BDD scenarios.

mod given;
mod then;
mod when;
