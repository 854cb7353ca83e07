//! Model client abstraction

use super::messages::{LlmMessage, LlmResponse};
use crate::error::MentorResult;
use crate::tools::ToolSchema;
use async_trait::async_trait;

/// A chat-completion capable language model
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Provider name used in logs and errors, e.g. "google"
    fn provider(&self) -> &str;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Send one request and wait for the complete answer
    ///
    /// `system` carries the agent's standing instructions. `tools` are
    /// advertised to the model, which may answer with tool calls instead
    /// of text.
    async fn chat(
        &self,
        system: Option<&str>,
        messages: &[LlmMessage],
        tools: Option<&[ToolSchema]>,
    ) -> MentorResult<LlmResponse>;
}
