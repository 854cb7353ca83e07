//! Request format conversion for the Gemini API

use super::messages::{LlmMessage, MessageRole};
use crate::tools::ToolSchema;
use serde_json::{Value, json};

/// Gemini request body converter
pub struct GeminiConverter;

impl GeminiConverter {
    /// Convert conversation messages into Gemini `contents`
    ///
    /// Consecutive tool results are merged into a single user turn, which is
    /// how Gemini expects parallel function responses.
    pub fn contents(messages: &[LlmMessage]) -> Vec<Value> {
        let mut converted: Vec<Value> = Vec::new();
        let mut pending_responses: Vec<Value> = Vec::new();

        for message in messages {
            if message.role != MessageRole::Tool && !pending_responses.is_empty() {
                converted.push(json!({
                    "role": "user",
                    "parts": std::mem::take(&mut pending_responses)
                }));
            }

            match message.role {
                MessageRole::User => {
                    converted.push(json!({
                        "role": "user",
                        "parts": [{"text": message.content}]
                    }));
                }
                MessageRole::Assistant => {
                    let mut parts = Vec::new();

                    if !message.content.is_empty() {
                        parts.push(json!({"text": message.content}));
                    }

                    if let Some(tool_calls) = &message.tool_calls {
                        for tool_call in tool_calls {
                            parts.push(json!({
                                "functionCall": {
                                    "name": tool_call.name,
                                    "args": tool_call.arguments
                                }
                            }));
                        }
                    }

                    converted.push(json!({
                        "role": "model",
                        "parts": parts
                    }));
                }
                MessageRole::Tool => {
                    pending_responses.push(json!({
                        "functionResponse": {
                            "name": message.name.as_deref().unwrap_or_default(),
                            "response": {"content": message.content}
                        }
                    }));
                }
            }
        }

        if !pending_responses.is_empty() {
            converted.push(json!({
                "role": "user",
                "parts": pending_responses
            }));
        }

        converted
    }

    /// Convert tool schemas into Gemini `functionDeclarations`
    pub fn function_declarations(tools: &[ToolSchema]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": tool.parameters
                })
            })
            .collect()
    }
}
