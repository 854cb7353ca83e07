//! Web search through SerpApi

use async_trait::async_trait;
use mentor_core::config::{SearchSettings, mask_api_key};
use mentor_core::error::{MentorError, MentorResult};
use mentor_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Name the model uses to call the search tool
pub const WEB_SEARCH_TOOL: &str = "web_search";

const MAX_RESULTS: u32 = 10;

/// One organic search hit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// SerpApi reports an empty Google result page through `error`
const NO_RESULTS_STATE: &str = "Fully empty";
const NO_RESULTS_ERROR: &str = "hasn't returned any results";

#[derive(Debug, Default, Deserialize)]
struct SearchInformation {
    #[serde(default)]
    organic_results_state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<SearchResult>,
    #[serde(default)]
    search_information: SearchInformation,
    #[serde(default)]
    error: Option<String>,
}

impl SearchResponse {
    fn is_empty_page(&self) -> bool {
        self.search_information.organic_results_state.as_deref() == Some(NO_RESULTS_STATE)
            || self
                .error
                .as_deref()
                .is_some_and(|e| e.contains(NO_RESULTS_ERROR))
    }
}

/// Google search via SerpApi, bound to one API key
#[derive(Clone)]
pub struct SerpApiSearchTool {
    settings: SearchSettings,
    api_key: String,
    http_client: Client,
}

impl fmt::Debug for SerpApiSearchTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiSearchTool")
            .field("settings", &self.settings)
            .field("api_key", &mask_api_key(&self.api_key))
            .finish()
    }
}

impl SerpApiSearchTool {
    pub fn new(settings: SearchSettings, api_key: impl Into<String>) -> MentorResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MentorError::config("SerpApi API key not provided"));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!("mentor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                MentorError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "Building the SerpApi search tool",
                )
            })?;

        Ok(Self::with_http_client(settings, api_key, http_client))
    }

    pub fn with_http_client(
        settings: SearchSettings,
        api_key: impl Into<String>,
        http_client: Client,
    ) -> Self {
        Self {
            settings,
            api_key: api_key.into(),
            http_client,
        }
    }

    /// Requested result count, clamped to 1..=10
    fn num_results(&self, call: &ToolCall) -> u32 {
        let requested = call.arguments.get("num_results").and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });

        match requested {
            Some(n) if n.is_finite() => (n.round().max(1.0) as u32).min(MAX_RESULTS),
            _ => self.settings.num_results.clamp(1, MAX_RESULTS),
        }
    }

    /// Run one search and return the organic results
    pub async fn search(&self, query: &str, num: u32) -> Result<Vec<SearchResult>, ToolError> {
        let url = format!("{}/search.json", self.settings.base_url.trim_end_matches('/'));
        let num = num.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("engine", self.settings.engine.as_str()),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ToolError::Timeout
                } else {
                    ToolError::Http(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::Http(e.without_url().to_string()))?;

        let parsed: Option<SearchResponse> = serde_json::from_str(&body).ok();
        if status.is_success() && parsed.as_ref().is_some_and(SearchResponse::is_empty_page) {
            debug!("SerpApi found no results");
            return Ok(Vec::new());
        }
        if let Some(error) = parsed.as_ref().and_then(|r| r.error.as_deref()) {
            return Err(ToolError::ExecutionFailed(format!("SerpApi error: {}", error)));
        }
        if !status.is_success() {
            return Err(ToolError::Http(format!(
                "SerpApi returned status {}",
                status.as_u16()
            )));
        }

        let parsed = parsed.ok_or_else(|| {
            ToolError::ExecutionFailed("SerpApi returned a malformed body".to_string())
        })?;
        Ok(parsed.organic_results)
    }
}

/// Render results as a markdown list of links
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{}\".", query);
    }

    let mut markdown = format!("Search results for \"{}\":\n", query);
    for result in results {
        markdown.push_str(&format!("\n- [{}]({})", result.title.trim(), result.link));
        if let Some(snippet) = result.snippet.as_deref().filter(|s| !s.trim().is_empty()) {
            markdown.push_str(&format!("\n  {}", snippet.trim()));
        }
    }
    markdown
}

#[async_trait]
impl Tool for SerpApiSearchTool {
    fn name(&self) -> &str {
        WEB_SEARCH_TOOL
    }

    fn description(&self) -> &str {
        "Search the web with Google and return the top results as markdown links. \
         Use it to find courses, books, articles, videos and practice material."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("query", "The search query to send."),
                ToolParameter::integer("num_results", "Number of results to return (1-10).")
                    .optional(),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let query = call
            .get_string("query")
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' parameter".to_string()))?;
        let num = self.num_results(call);

        debug!(query = %query, num, "searching the web");
        let results = self.search(query.trim(), num).await?;
        debug!(hits = results.len(), "search finished");

        Ok(ToolResult::new(
            &call.id,
            self.name(),
            format_results(query.trim(), &results),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn tool() -> SerpApiSearchTool {
        SerpApiSearchTool::with_http_client(SearchSettings::default(), "key", Client::new())
    }

    fn call_with(args: Value) -> ToolCall {
        let arguments: HashMap<String, Value> = match args {
            Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        ToolCall::new("call_1", WEB_SEARCH_TOOL, arguments)
    }

    #[test]
    fn test_num_results_clamped() {
        let tool = tool();
        assert_eq!(tool.num_results(&call_with(json!({"query": "x"}))), 5);
        assert_eq!(tool.num_results(&call_with(json!({"num_results": 3}))), 3);
        assert_eq!(tool.num_results(&call_with(json!({"num_results": 3.0}))), 3);
        assert_eq!(tool.num_results(&call_with(json!({"num_results": 50}))), 10);
        assert_eq!(tool.num_results(&call_with(json!({"num_results": 0}))), 1);
        assert_eq!(tool.num_results(&call_with(json!({"num_results": "7"}))), 7);
    }

    #[test]
    fn test_format_results() {
        let results = vec![
            SearchResult {
                title: "Linear Algebra Done Right".to_string(),
                link: "https://linear.axler.net".to_string(),
                snippet: Some("A textbook.".to_string()),
            },
            SearchResult {
                title: "MIT 18.06".to_string(),
                link: "https://ocw.mit.edu/18-06".to_string(),
                snippet: None,
            },
        ];
        let markdown = format_results("linear algebra", &results);
        assert_eq!(
            markdown,
            "Search results for \"linear algebra\":\n\
             \n- [Linear Algebra Done Right](https://linear.axler.net)\n  A textbook.\
             \n- [MIT 18.06](https://ocw.mit.edu/18-06)"
        );
        assert_eq!(format_results("x", &[]), "No results found for \"x\".");
    }

    #[test]
    fn test_empty_result_page_detected() {
        let empty: SearchResponse = serde_json::from_value(json!({
            "search_information": {"organic_results_state": "Fully empty"}
        }))
        .unwrap();
        assert!(empty.is_empty_page());

        let message_only: SearchResponse = serde_json::from_value(json!({
            "error": "Google hasn't returned any results for this query."
        }))
        .unwrap();
        assert!(message_only.is_empty_page());

        let bad_key: SearchResponse =
            serde_json::from_value(json!({"error": "Invalid API key."})).unwrap();
        assert!(!bad_key.is_empty_page());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = SerpApiSearchTool::new(SearchSettings::default(), " ").unwrap_err();
        assert!(matches!(err, MentorError::Config { .. }));
    }

    #[test]
    fn test_schema() {
        let schema = tool().schema();
        assert_eq!(schema.name, "web_search");
        assert_eq!(schema.parameters["required"], json!(["query"]));
    }
}
