//! An agent spec bound to live capabilities

use super::prompt::system_prompt;
use super::response::{AgentRunResponse, RawResponse};
use super::spec::AgentSpec;
use crate::error::{MentorError, MentorResult};
use crate::llm::{LlmMessage, LlmUsage, ModelClient};
use crate::tools::{Tool, ToolCall, ToolSchema};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A configured agent ready to answer a topic
///
/// Each instance owns its model client and optional search tool; nothing is
/// shared with sibling agents.
#[derive(Clone)]
pub struct RunnableAgent {
    spec: AgentSpec,
    system_prompt: String,
    model: Arc<dyn ModelClient>,
    search: Option<Arc<dyn Tool>>,
    max_tool_rounds: u32,
}

impl fmt::Debug for RunnableAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnableAgent")
            .field("spec", &self.spec)
            .field("model", &self.model.model())
            .field("has_search_tool", &self.has_search_tool())
            .field("max_tool_rounds", &self.max_tool_rounds)
            .finish()
    }
}

impl RunnableAgent {
    /// Bind a spec to a model client and, optionally, a search tool
    pub fn new(
        spec: AgentSpec,
        model: Arc<dyn ModelClient>,
        search: Option<Arc<dyn Tool>>,
        max_tool_rounds: u32,
    ) -> Self {
        Self {
            system_prompt: system_prompt(&spec),
            spec,
            model,
            search,
            max_tool_rounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &AgentSpec {
        &self.spec
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn has_search_tool(&self) -> bool {
        self.search.is_some()
    }

    /// Answer `topic` in a single turn
    ///
    /// When a search tool is bound the model may call it up to
    /// `max_tool_rounds` times; after that one more request is made without
    /// tools so the model has to answer. Any model or tool failure fails
    /// the whole turn.
    #[instrument(skip(self, topic), fields(agent = %self.spec.name))]
    pub async fn respond(&self, topic: &str) -> MentorResult<RawResponse> {
        let schemas: Option<Vec<ToolSchema>> = self.search.as_ref().map(|tool| vec![tool.schema()]);
        let mut messages = vec![LlmMessage::user(topic)];
        let mut executed: Vec<ToolCall> = Vec::new();
        let mut usage: Option<LlmUsage> = None;
        let mut rounds = 0;

        let response = loop {
            let tools = if rounds < self.max_tool_rounds {
                schemas.as_deref()
            } else {
                None
            };

            let response = self
                .model
                .chat(Some(&self.system_prompt), &messages, tools)
                .await?;

            if let Some(call_usage) = &response.usage {
                usage.get_or_insert_with(LlmUsage::default).add(call_usage);
            }

            if !response.has_tool_calls() || tools.is_none() {
                break response;
            }

            rounds += 1;
            debug!(
                round = rounds,
                calls = response.tool_calls.len(),
                "model requested tools"
            );

            messages.push(LlmMessage::assistant_with_tools(
                response.content.clone(),
                response.tool_calls.clone(),
            ));
            for call in &response.tool_calls {
                let output = self.run_tool(call).await?;
                messages.push(LlmMessage::tool(output, call.id.clone(), call.name.clone()));
                executed.push(call.clone());
            }
        };

        let content = if self.spec.show_tool_calls && !executed.is_empty() {
            format!("{}\n\n{}", render_tool_calls(&executed), response.content)
        } else {
            response.content
        };

        Ok(AgentRunResponse {
            agent: self.spec.name.clone(),
            content,
            model: response
                .model
                .or_else(|| Some(self.model.model().to_string())),
            tool_calls: executed.iter().map(ToolCall::render).collect(),
            usage,
            finish_reason: response.finish_reason,
        }
        .into_raw())
    }

    async fn run_tool(&self, call: &ToolCall) -> MentorResult<String> {
        let tool = self
            .search
            .as_ref()
            .filter(|tool| tool.name() == call.name)
            .ok_or_else(|| MentorError::tool(&call.name, "model requested an unknown tool"))?;

        let result = tool
            .execute_with_timing(call)
            .await
            .map_err(|e| e.into_mentor_error(tool.name()))?;

        debug!(
            tool = %call.name,
            elapsed_ms = result.execution_time_ms.unwrap_or_default(),
            "tool finished"
        );
        Ok(result.output)
    }
}

fn render_tool_calls(calls: &[ToolCall]) -> String {
    let mut rendered = String::from("Running:");
    for call in calls {
        rendered.push_str("\n - ");
        rendered.push_str(&call.render());
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmResponse;
    use crate::tools::{ToolError, ToolParameter, ToolResult};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Model that replays canned responses and records what it was sent
    struct ScriptedModel {
        replies: Mutex<Vec<LlmResponse>>,
        seen_tools: Mutex<Vec<bool>>,
    }

    impl ScriptedModel {
        fn new(mut replies: Vec<LlmResponse>) -> Self {
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                seen_tools: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedModel {
        fn provider(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-1"
        }

        async fn chat(
            &self,
            _system: Option<&str>,
            _messages: &[LlmMessage],
            tools: Option<&[ToolSchema]>,
        ) -> MentorResult<LlmResponse> {
            self.seen_tools.lock().unwrap().push(tools.is_some());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| MentorError::llm("script exhausted"))
        }
    }

    struct StubSearch {
        fail: bool,
    }

    #[async_trait]
    impl Tool for StubSearch {
        fn name(&self) -> &str {
            "web_search"
        }

        fn description(&self) -> &str {
            "stub"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(
                "web_search",
                "stub",
                vec![ToolParameter::string("query", "q")],
            )
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            if self.fail {
                return Err(ToolError::ExecutionFailed("invalid api key".to_string()));
            }
            Ok(ToolResult::new(&call.id, "web_search", "- [Book](https://example.com)"))
        }
    }

    fn search_call(query: &str) -> ToolCall {
        let mut args = HashMap::new();
        args.insert("query".to_string(), json!(query));
        ToolCall::new("call_1", "web_search", args)
    }

    fn content_of(raw: &RawResponse) -> String {
        match raw {
            RawResponse::Record(map) => map["content"].as_str().unwrap_or_default().to_string(),
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_shows_model_and_search() {
        let agent = RunnableAgent::new(
            AgentSpec::new("Research Librarian", "Librarian").with_search_tool(),
            Arc::new(ScriptedModel::new(Vec::new())),
            Some(Arc::new(StubSearch { fail: false })),
            5,
        );
        let debug = format!("{:?}", agent);
        assert!(debug.contains("Research Librarian"));
        assert!(debug.contains("scripted-1"));
        assert!(debug.contains("has_search_tool: true"));
    }

    #[tokio::test]
    async fn test_plain_answer() {
        let model = Arc::new(ScriptedModel::new(vec![LlmResponse::new("Matrices!")]));
        let agent = RunnableAgent::new(AgentSpec::new("Professor", "Teacher"), model.clone(), None, 5);

        let raw = agent.respond("Linear Algebra").await.unwrap();
        assert_eq!(content_of(&raw), "Matrices!");
        assert_eq!(*model.seen_tools.lock().unwrap(), vec![false]);
    }

    #[tokio::test]
    async fn test_tool_loop_and_shown_calls() {
        let model = Arc::new(ScriptedModel::new(vec![
            LlmResponse::with_tool_calls("", vec![search_call("linear algebra books")]),
            LlmResponse::new("Here are resources."),
        ]));
        let spec = AgentSpec::new("Research Librarian", "Librarian")
            .with_search_tool()
            .with_tool_calls_shown();
        let agent = RunnableAgent::new(
            spec,
            model.clone(),
            Some(Arc::new(StubSearch { fail: false })),
            5,
        );

        let raw = agent.respond("Linear Algebra").await.unwrap();
        let content = content_of(&raw);
        assert!(content.starts_with("Running:\n - web_search(query=\"linear algebra books\")"));
        assert!(content.ends_with("Here are resources."));
        assert_eq!(*model.seen_tools.lock().unwrap(), vec![true, true]);
    }

    #[tokio::test]
    async fn test_round_limit_forces_answer() {
        let model = Arc::new(ScriptedModel::new(vec![
            LlmResponse::with_tool_calls("", vec![search_call("a")]),
            LlmResponse::new("Final."),
        ]));
        let spec = AgentSpec::new("Teaching Assistant", "Exercises").with_search_tool();
        let agent = RunnableAgent::new(
            spec,
            model.clone(),
            Some(Arc::new(StubSearch { fail: false })),
            1,
        );

        let raw = agent.respond("topic").await.unwrap();
        assert_eq!(content_of(&raw), "Final.");
        assert_eq!(*model.seen_tools.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_tool_failure_fails_turn() {
        let model = Arc::new(ScriptedModel::new(vec![LlmResponse::with_tool_calls(
            "",
            vec![search_call("a")],
        )]));
        let spec = AgentSpec::new("Teaching Assistant", "Exercises").with_search_tool();
        let agent = RunnableAgent::new(spec, model, Some(Arc::new(StubSearch { fail: true })), 5);

        let err = agent.respond("topic").await.unwrap_err();
        assert!(matches!(err, MentorError::Tool { .. }));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error() {
        let mut call = search_call("a");
        call.name = "calculator".to_string();
        let model = Arc::new(ScriptedModel::new(vec![LlmResponse::with_tool_calls(
            "",
            vec![call],
        )]));
        let spec = AgentSpec::new("Teaching Assistant", "Exercises").with_search_tool();
        let agent = RunnableAgent::new(spec, model, Some(Arc::new(StubSearch { fail: false })), 5);

        let err = agent.respond("topic").await.unwrap_err();
        assert!(err.to_string().contains("calculator"));
    }
}
