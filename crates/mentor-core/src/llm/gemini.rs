//! Google (Gemini) model client

use super::client::ModelClient;
use super::converters::GeminiConverter;
use super::messages::{LlmMessage, LlmResponse};
use super::parser::GeminiParser;
use crate::config::ModelSettings;
use crate::error::{MentorError, MentorResult};
use crate::tools::ToolSchema;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

/// Gemini `generateContent` client bound to one API key
pub struct GeminiClient {
    settings: ModelSettings,
    api_key: String,
    http_client: Client,
}

impl GeminiClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(settings: ModelSettings, api_key: impl Into<String>) -> MentorResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MentorError::config("Google API key not provided"));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| {
                MentorError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "Building the Gemini client",
                )
            })?;

        Ok(Self::with_http_client(settings, api_key, http_client))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(
        settings: ModelSettings,
        api_key: impl Into<String>,
        http_client: Client,
    ) -> Self {
        Self {
            settings,
            api_key: api_key.into(),
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn request_body(
        &self,
        system: Option<&str>,
        messages: &[LlmMessage],
        tools: Option<&[ToolSchema]>,
    ) -> Value {
        let mut request_body = json!({
            "contents": GeminiConverter::contents(messages),
        });

        if let Some(system) = system.filter(|s| !s.trim().is_empty()) {
            request_body["systemInstruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        let mut generation_config = json!({});
        if let Some(max_tokens) = self.settings.max_output_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }
        if let Some(temperature) = self.settings.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if generation_config
            .as_object()
            .is_some_and(|obj| !obj.is_empty())
        {
            request_body["generationConfig"] = generation_config;
        }

        if let Some(tools) = tools.filter(|t| !t.is_empty()) {
            request_body["tools"] = json!([{
                "functionDeclarations": GeminiConverter::function_declarations(tools)
            }]);
        }

        request_body
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn provider(&self) -> &str {
        "google"
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    #[instrument(skip(self, system, messages, tools), fields(model = %self.settings.model), level = "debug")]
    async fn chat(
        &self,
        system: Option<&str>,
        messages: &[LlmMessage],
        tools: Option<&[ToolSchema]>,
    ) -> MentorResult<LlmResponse> {
        let request_body = self.request_body(system, messages, tools);
        tracing::trace!("Gemini request body: {}", request_body);

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = GeminiParser::error_message(&error_text).unwrap_or(error_text);
            return Err(MentorError::http_status(
                format!("Gemini API error (status {}): {}", status, detail),
                status.as_u16(),
            ));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            MentorError::llm_with_provider(format!("Failed to parse Gemini response: {}", e), "google")
        })?;

        let parsed = GeminiParser::parse(response_json, &self.settings.model)?;
        if let Some(usage) = &parsed.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "gemini request completed"
            );
        }
        Ok(parsed)
    }
}
