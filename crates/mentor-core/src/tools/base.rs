//! Core Tool trait definition

use super::types::{ToolCall, ToolResult, ToolSchema};
use crate::error::MentorError;
use async_trait::async_trait;
use std::time::Instant;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool timeout
    #[error("Tool execution timeout")]
    Timeout,

    /// HTTP error while talking to the tool's backend
    #[error("HTTP error: {0}")]
    Http(String),
}

impl ToolError {
    /// Convert into a crate error attributed to `tool_name`
    pub fn into_mentor_error(self, tool_name: &str) -> MentorError {
        match self {
            ToolError::Timeout => MentorError::Timeout {
                message: format!("tool '{}' did not answer in time", tool_name),
            },
            other => MentorError::tool(tool_name, other.to_string()),
        }
    }
}

/// Capability an agent may invoke while composing an answer
///
/// Failures are not reported back to the model: they fail the agent's
/// whole turn.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "web_search")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Execute and stamp the result with its execution time
    async fn execute_with_timing(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let start_time = Instant::now();
        let result = self.execute(call).await?;
        Ok(result.with_execution_time(start_time.elapsed().as_millis() as u64))
    }
}
