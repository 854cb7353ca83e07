//! Tool abstractions for agents that can look things up mid-answer

pub mod base;
pub mod types;

pub use base::{Tool, ToolError};
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
