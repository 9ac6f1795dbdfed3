//! Domain model for registered agents.
//!
//! An agent is a named execution unit bound to a model-type identifier and
//! owned by a principal. Agents carry a monotonically increasing execution
//! counter and an activation status. All infrastructure concerns are kept
//! outside the domain boundary.

mod agent;
mod error;
mod ids;
mod model_type;
mod name;
mod owner;
mod status;

pub use agent::{Agent, PersistedAgentData};
pub use error::{AgentDomainError, ParseAgentStatusError};
pub use ids::AgentId;
pub use model_type::ModelType;
pub use name::AgentName;
pub use owner::{OwnerId, ZERO_ADDRESS};
pub use status::AgentStatus;
