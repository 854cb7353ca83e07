//! Response parsing for the Gemini API

use super::messages::{LlmResponse, LlmUsage};
use crate::error::{MentorError, MentorResult};
use crate::tools::ToolCall;
use serde_json::Value;
use std::collections::HashMap;

/// Gemini `generateContent` response parser
pub struct GeminiParser;

impl GeminiParser {
    /// Parse a `generateContent` response body
    pub fn parse(response: Value, model: &str) -> MentorResult<LlmResponse> {
        let candidates = match response["candidates"].as_array() {
            Some(candidates) if !candidates.is_empty() => candidates,
            _ => {
                if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
                    return Err(MentorError::llm_with_provider(
                        format!("Prompt blocked by Gemini: {}", reason),
                        "google",
                    ));
                }
                return Err(MentorError::llm_with_provider(
                    "No candidates in Gemini response",
                    "google",
                ));
            }
        };

        let candidate = &candidates[0];
        let finish_reason = candidate["finishReason"].as_str().map(|s| s.to_string());
        let content_parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
            MentorError::llm_with_provider(
                format!(
                    "No content parts in Gemini response (finish reason: {})",
                    finish_reason.as_deref().unwrap_or("unknown")
                ),
                "google",
            )
        })?;

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        for part in content_parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            } else if let Some(function_call) = part["functionCall"].as_object() {
                let arguments: HashMap<String, Value> = function_call
                    .get("args")
                    .and_then(|v| v.as_object())
                    .map(|args| args.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                    .unwrap_or_default();
                tool_calls.push(ToolCall {
                    id: format!("call_{}", uuid::Uuid::new_v4()),
                    name: function_call
                        .get("name")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    arguments,
                });
            }
        }

        let usage = response["usageMetadata"].as_object().map(|usage_metadata| {
            let prompt_tokens = usage_metadata
                .get("promptTokenCount")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32;
            let completion_tokens = usage_metadata
                .get("candidatesTokenCount")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32;
            let total_tokens = usage_metadata
                .get("totalTokenCount")
                .and_then(|v| v.as_u64())
                .unwrap_or((prompt_tokens + completion_tokens) as u64)
                as u32;

            LlmUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens,
            }
        });

        Ok(LlmResponse {
            content,
            tool_calls,
            usage,
            model: Some(
                response["modelVersion"]
                    .as_str()
                    .unwrap_or(model)
                    .to_string(),
            ),
            finish_reason,
        })
    }

    /// Pull the provider's error message out of an error body, if any
    pub fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value["error"]["message"].as_str().map(|s| s.to_string())
    }
}
