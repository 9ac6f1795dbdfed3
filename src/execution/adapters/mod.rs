//! Model executor adapters.

mod language;
mod router;

pub use language::{DEFAULT_LANGUAGE_CONFIDENCE, SimulatedLanguageBackend};
pub use router::BackendRouter;
