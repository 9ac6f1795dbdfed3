//! Execution services.

mod dispatcher;

pub use dispatcher::ExecutionDispatcher;
