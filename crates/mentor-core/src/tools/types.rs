//! Tool-related type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tool call requested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments to pass to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new<S: Into<String>>(
        id: S,
        name: S,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Get a typed argument value
    pub fn get_argument<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.arguments
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_argument::<String>(key)
    }

    /// Render as `name(key=value, ...)` with keys sorted
    pub fn render(&self) -> String {
        let mut keys: Vec<&String> = self.arguments.keys().collect();
        keys.sort();
        let args: Vec<String> = keys
            .into_iter()
            .map(|k| format!("{}={}", k, self.arguments[k]))
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }
}

/// Result of a tool execution, fed back to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool call ID this result corresponds to
    pub call_id: String,
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Output text for the model
    pub output: String,
    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,
}

impl ToolResult {
    /// Create a tool result
    pub fn new(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            output: output.into(),
            execution_time_ms: None,
        }
    }

    /// Add execution time
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }
}

/// Parameter definition for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter type (string, number, integer, boolean)
    pub param_type: String,
    /// Whether this parameter is required
    pub required: bool,
}

impl ToolParameter {
    /// Create a required string parameter
    pub fn string<S: Into<String>>(name: S, description: S) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: "string".to_string(),
            required: true,
        }
    }

    /// Create a required integer parameter
    pub fn integer<S: Into<String>>(name: S, description: S) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: "integer".to_string(),
            required: true,
        }
    }

    /// Make parameter optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// JSON schema for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input parameters schema
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new<S: Into<String>>(name: S, description: S, parameters: Vec<ToolParameter>) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(param.name.clone());
            }

            properties.insert(
                param.name,
                serde_json::json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
        }

        let parameters_schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        });

        Self {
            name: name.into(),
            description: description.into(),
            parameters: parameters_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_marks_required_parameters() {
        let schema = ToolSchema::new(
            "web_search",
            "Search the web",
            vec![
                ToolParameter::string("query", "What to search for"),
                ToolParameter::integer("num_results", "How many results").optional(),
            ],
        );

        assert_eq!(schema.parameters["required"], json!(["query"]));
        assert_eq!(schema.parameters["properties"]["num_results"]["type"], "integer");
    }

    #[test]
    fn test_tool_call_render_is_stable() {
        let mut args = HashMap::new();
        args.insert("query".to_string(), json!("linear algebra"));
        args.insert("num_results".to_string(), json!(3));
        let call = ToolCall::new("call_1", "web_search", args);

        assert_eq!(
            call.render(),
            r#"web_search(num_results=3, query="linear algebra")"#
        );
        assert_eq!(call.get_string("query").as_deref(), Some("linear algebra"));
        assert_eq!(call.get_argument::<u32>("num_results"), Some(3));
    }
}
