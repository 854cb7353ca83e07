//! Static agent definitions

use serde::{Deserialize, Serialize};

/// Immutable description of one agent role
///
/// Specs are plain data: every role runs through the same
/// [`RunnableAgent`](super::RunnableAgent), parameterized by its spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Unique display name, e.g. "Professor"
    pub name: String,
    /// One-line role description given to the model
    pub role: String,
    /// Ordered standing instructions
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Whether the agent may call the web search tool
    #[serde(default)]
    pub uses_search_tool: bool,
    /// Panel title used by the presentation layer
    #[serde(default)]
    pub heading: Option<String>,
    /// Prefix the answer with the tool calls the agent made
    #[serde(default)]
    pub show_tool_calls: bool,
    /// Ask the model to format its answer as markdown
    #[serde(default = "default_markdown")]
    pub markdown: bool,
}

fn default_markdown() -> bool {
    true
}

impl AgentSpec {
    /// Create a spec with no instructions and no search tool
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            instructions: Vec::new(),
            uses_search_tool: false,
            heading: None,
            show_tool_calls: false,
            markdown: true,
        }
    }

    /// Append an instruction
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    /// Allow the agent to search the web
    pub fn with_search_tool(mut self) -> Self {
        self.uses_search_tool = true;
        self
    }

    /// Set the panel title
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Show tool calls in the answer
    pub fn with_tool_calls_shown(mut self) -> Self {
        self.show_tool_calls = true;
        self
    }

    /// Panel title, falling back to the agent name
    pub fn panel_heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = AgentSpec::new("Tutor", "Socratic Questioner")
            .with_instruction("Ask one question at a time.")
            .with_search_tool()
            .with_tool_calls_shown();

        assert_eq!(spec.instructions.len(), 1);
        assert!(spec.uses_search_tool);
        assert!(spec.show_tool_calls);
        assert!(spec.markdown);
        assert_eq!(spec.panel_heading(), "Tutor");
        assert_eq!(spec.with_heading("🎓 Tutor").panel_heading(), "🎓 Tutor");
    }

    #[test]
    fn test_deserialize_minimal() {
        let spec: AgentSpec =
            serde_json::from_str(r#"{"name": "Coach", "role": "Motivator"}"#).unwrap();
        assert!(spec.instructions.is_empty());
        assert!(!spec.uses_search_tool);
        assert!(spec.markdown);
    }
}
