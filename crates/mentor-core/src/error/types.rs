//! Core error type for Mentor

use thiserror::Error;

/// Result type alias for Mentor operations
pub type MentorResult<T> = Result<T, MentorError>;

/// Main error type for Mentor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MentorError {
    /// Missing or invalid configuration, including empty credentials
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Rejected user input, e.g. a blank topic
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Model provider returned something unusable
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
    },

    /// HTTP transport or status errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// Tool execution errors
    #[error("Tool error: {tool_name}: {message}")]
    Tool { tool_name: String, message: String },

    /// An operation did not finish in time
    #[error("Timed out: {message}")]
    Timeout { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Anything else
    #[error("Error: {message}")]
    Other { message: String },
}
