//! Production capability factory

use crate::web_search::SerpApiSearchTool;
use mentor_core::agent::CapabilityFactory;
use mentor_core::config::{ModelSettings, SearchSettings};
use mentor_core::error::MentorResult;
use mentor_core::llm::{GeminiClient, ModelClient};
use mentor_core::tools::Tool;
use std::sync::Arc;

/// Builds Gemini clients and SerpApi search tools
///
/// Every call creates a fresh client so agents never share connections or
/// keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveCapabilities;

impl CapabilityFactory for LiveCapabilities {
    fn model_client(
        &self,
        settings: &ModelSettings,
        api_key: &str,
    ) -> MentorResult<Arc<dyn ModelClient>> {
        Ok(Arc::new(GeminiClient::new(settings.clone(), api_key)?))
    }

    fn search_tool(
        &self,
        settings: &SearchSettings,
        api_key: &str,
    ) -> MentorResult<Arc<dyn Tool>> {
        Ok(Arc::new(SerpApiSearchTool::new(settings.clone(), api_key)?))
    }
}
