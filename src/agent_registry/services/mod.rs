//! Application services for agent registration and discovery.

mod registry;

pub use registry::{
    AgentPatch, AgentRegistryService, AgentRegistryServiceError, AgentRegistryServiceResult,
    RegisterAgentRequest,
};
