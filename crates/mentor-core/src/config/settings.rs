//! Settings model

use super::logging_config::LoggingConfig;
use super::timeouts;
use crate::agent::AgentSpec;
use crate::error::{MentorError, MentorResult};
use serde::{Deserialize, Serialize};

/// Default Gemini model used by every agent
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Gemini API endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default SerpApi endpoint
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// Language model settings shared by all agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model identifier, e.g. "gemini-2.0-flash"
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum tokens per answer
    pub max_output_tokens: Option<u32>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
            connect_timeout_secs: timeouts::llm::CONNECTION_SECS,
            request_timeout_secs: timeouts::llm::REQUEST_SECS,
        }
    }
}

/// Web search settings for search-enabled agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// API base URL
    pub base_url: String,
    /// SerpApi engine, "google" unless overridden
    pub engine: String,
    /// Results returned when the model does not ask for a count
    pub num_results: u32,
    pub request_timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            engine: "google".to_string(),
            num_results: 5,
            request_timeout_secs: timeouts::search::REQUEST_SECS,
        }
    }
}

/// How a fan-out run is executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Invoke agents concurrently instead of one after another
    pub parallel: bool,
    /// Bound on each agent's turn; 0 disables the bound
    pub agent_timeout_secs: u64,
    /// Maximum model/tool round trips before the agent must answer
    pub max_tool_rounds: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            parallel: false,
            agent_timeout_secs: timeouts::agent::RESPOND_SECS,
            max_tool_rounds: 5,
        }
    }
}

/// Complete settings for a Mentor run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelSettings,
    pub search: SearchSettings,
    pub run: RunSettings,
    pub logging: LoggingConfig,
    /// Extra agents registered after the built-in team
    pub agents: Vec<AgentSpec>,
    /// Register only `agents`, without the built-in team
    pub replace_team: bool,
}

impl Settings {
    /// Check that the settings can drive a run
    pub fn validate(&self) -> MentorResult<()> {
        if self.model.model.trim().is_empty() {
            return Err(MentorError::config("model identifier must not be empty"));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(MentorError::config("model base_url must not be empty"));
        }
        if self.search.base_url.trim().is_empty() {
            return Err(MentorError::config("search base_url must not be empty"));
        }
        if !(1..=10).contains(&self.search.num_results) {
            return Err(MentorError::config_with_context(
                format!("search num_results must be 1..=10, got {}", self.search.num_results),
                "search.num_results",
            ));
        }
        if self.run.max_tool_rounds == 0 {
            return Err(MentorError::config("run.max_tool_rounds must be at least 1"));
        }
        if let Some(t) = self.model.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(MentorError::config(format!(
                    "temperature must be within 0.0..=2.0, got {}",
                    t
                )));
            }
        }
        if self.replace_team && self.agents.is_empty() {
            return Err(MentorError::config(
                "replace_team is set but no agents are configured",
            ));
        }
        Ok(())
    }
}
