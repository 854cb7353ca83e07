//! Agent definitions, registry and runnable agents

pub mod prompt;
pub mod registry;
pub mod response;
pub mod runnable;
pub mod spec;
pub mod team;

pub use registry::{AgentRegistry, CapabilityFactory};
pub use response::{AgentRunResponse, RawResponse};
pub use runnable::RunnableAgent;
pub use spec::AgentSpec;
