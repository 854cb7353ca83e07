//! Mentor Core Library
//!
//! This crate provides the core of the Mentor teaching agent team: agent
//! specs and their registry, the Gemini model client, the fan-out runner
//! that sends one topic to every agent, and configuration.

pub mod agent;
pub mod config;
pub mod error;
pub mod fanout;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agent::{AgentRegistry, AgentSpec, CapabilityFactory, RawResponse, RunnableAgent};
pub use config::{ConfigLoader, Credentials, ResolvedCredentials, Settings, SettingsOverrides};
pub use error::{FailureKind, MentorError, MentorResult};
pub use fanout::{AgentResult, FanOutRunner, Outcome, RunMode, RunOutcome, RunRequest, normalize};
pub use llm::{GeminiClient, LlmMessage, LlmResponse, ModelClient};
pub use tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
