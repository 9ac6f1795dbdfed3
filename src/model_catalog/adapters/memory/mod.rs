//! In-memory model catalog adapter.

mod catalog;

pub use catalog::InMemoryModelCatalog;
