//! Response shapes produced by agents

use crate::llm::LlmUsage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;

/// Whatever an agent returned, before normalization
///
/// The model layer is free to hand back plain text, a keyed record or any
/// other JSON value; [`normalize`](crate::fanout::normalize) turns each of
/// them into display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    /// A bare string payload
    Text(String),
    /// A keyed record such as an agent run response
    Record(Map<String, Value>),
    /// Any other JSON shape
    Other(Value),
}

impl From<Value> for RawResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Record(map),
            other => Self::Other(other),
        }
    }
}

impl From<String> for RawResponse {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawResponse::Text(text) => f.write_str(text),
            RawResponse::Record(map) => {
                write!(f, "{}", Value::Object(map.clone()))
            }
            RawResponse::Other(Value::String(text)) => f.write_str(text),
            RawResponse::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Summary of one agent turn, the record shape agents hand to the runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRunResponse {
    /// Agent name
    pub agent: String,
    /// Final answer text
    pub content: String,
    /// Model that produced the answer
    pub model: Option<String>,
    /// Rendered tool calls, in execution order
    pub tool_calls: Vec<String>,
    /// Token usage summed over all model calls of the turn
    pub usage: Option<LlmUsage>,
    pub finish_reason: Option<String>,
}

impl AgentRunResponse {
    /// Convert into the record form consumed by the normalizer
    pub fn into_raw(self) -> RawResponse {
        RawResponse::from(json!({
            "agent": self.agent,
            "content": self.content,
            "model": self.model,
            "tool_calls": self.tool_calls,
            "usage": self.usage,
            "finish_reason": self.finish_reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_picks_variant() {
        assert_eq!(
            RawResponse::from(json!("hi")),
            RawResponse::Text("hi".to_string())
        );
        assert!(matches!(
            RawResponse::from(json!({"a": 1})),
            RawResponse::Record(_)
        ));
        assert!(matches!(
            RawResponse::from(json!([1, 2])),
            RawResponse::Other(_)
        ));
    }

    #[test]
    fn test_display_string_forms() {
        assert_eq!(RawResponse::from("plain").to_string(), "plain");
        assert_eq!(RawResponse::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
        assert_eq!(RawResponse::Other(Value::Null).to_string(), "null");
        assert_eq!(RawResponse::Other(json!("s")).to_string(), "s");
    }

    #[test]
    fn test_run_response_record() {
        let raw = AgentRunResponse {
            agent: "Professor".to_string(),
            content: "Answer".to_string(),
            model: Some("gemini-2.0-flash".to_string()),
            tool_calls: Vec::new(),
            usage: None,
            finish_reason: Some("STOP".to_string()),
        }
        .into_raw();

        match raw {
            RawResponse::Record(map) => {
                assert_eq!(map["content"], "Answer");
                assert_eq!(map["agent"], "Professor");
                assert_eq!(map["usage"], Value::Null);
            }
            other => panic!("expected record, got {:?}", other),
        }
    }
}
