//! Agent registry
//!
//! Holds agent specs in registration order and turns them into
//! [`RunnableAgent`]s once credentials are known.

use super::runnable::RunnableAgent;
use super::spec::AgentSpec;
use super::team;
use crate::config::{Credentials, ModelSettings, SearchSettings, Settings};
use crate::error::{MentorError, MentorResult};
use crate::llm::ModelClient;
use crate::tools::Tool;
use std::fmt;
use std::sync::Arc;

/// Builds the concrete clients an agent is bound to
///
/// Production code uses the Gemini client and SerpApi tool; tests inject
/// fakes through this trait.
pub trait CapabilityFactory: Send + Sync {
    /// Create a model client authenticated with `api_key`
    fn model_client(
        &self,
        settings: &ModelSettings,
        api_key: &str,
    ) -> MentorResult<Arc<dyn ModelClient>>;

    /// Create a web search tool authenticated with `api_key`
    fn search_tool(&self, settings: &SearchSettings, api_key: &str)
    -> MentorResult<Arc<dyn Tool>>;
}

/// Ordered collection of agent specs
pub struct AgentRegistry {
    specs: Vec<AgentSpec>,
    model: ModelSettings,
    search: SearchSettings,
    max_tool_rounds: u32,
    factory: Arc<dyn CapabilityFactory>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new(settings: &Settings, factory: Arc<dyn CapabilityFactory>) -> Self {
        Self {
            specs: Vec::new(),
            model: settings.model.clone(),
            search: settings.search.clone(),
            max_tool_rounds: settings.run.max_tool_rounds,
            factory,
        }
    }

    /// Create a registry holding the four teaching roles
    pub fn with_teaching_team(
        settings: &Settings,
        factory: Arc<dyn CapabilityFactory>,
    ) -> MentorResult<Self> {
        let mut registry = Self::new(settings, factory);
        for spec in team::teaching_team() {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    /// Create a registry from settings
    ///
    /// The teaching team comes first unless `replace_team` is set; agents
    /// declared in the settings follow in file order.
    pub fn from_settings(
        settings: &Settings,
        factory: Arc<dyn CapabilityFactory>,
    ) -> MentorResult<Self> {
        let mut registry = if settings.replace_team {
            Self::new(settings, factory)
        } else {
            Self::with_teaching_team(settings, factory)?
        };
        for spec in &settings.agents {
            registry.register(spec.clone())?;
        }
        Ok(registry)
    }

    /// Add a spec; names must be non-empty and unique
    pub fn register(&mut self, mut spec: AgentSpec) -> MentorResult<()> {
        let name = spec.name.trim().to_string();
        if name.is_empty() {
            return Err(MentorError::config_with_context(
                "agent name must not be empty",
                format!("registering agent with role '{}'", spec.role),
            ));
        }
        if self.get(&name).is_some() {
            return Err(MentorError::config(format!(
                "agent '{}' is already registered",
                name
            )));
        }

        spec.name = name;
        tracing::debug!(agent = %spec.name, search = spec.uses_search_tool, "registered agent");
        self.specs.push(spec);
        Ok(())
    }

    /// Registered specs in registration order
    pub fn specs(&self) -> &[AgentSpec] {
        &self.specs
    }

    pub fn get(&self, name: &str) -> Option<&AgentSpec> {
        let name = name.trim();
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Bind one spec to clients built from `credentials`
    pub fn instantiate(
        &self,
        spec: &AgentSpec,
        credentials: &Credentials,
    ) -> MentorResult<RunnableAgent> {
        if !credentials.has_model_key() {
            return Err(MentorError::config_with_context(
                "Google API key is required",
                format!("instantiating agent '{}'", spec.name),
            ));
        }

        let search = if spec.uses_search_tool {
            if !credentials.has_search_key() {
                return Err(MentorError::config_with_context(
                    "SerpApi API key is required for agents that search the web",
                    format!("instantiating agent '{}'", spec.name),
                ));
            }
            Some(
                self.factory
                    .search_tool(&self.search, credentials.search_api_key())?,
            )
        } else {
            None
        };

        let model = self
            .factory
            .model_client(&self.model, credentials.model_api_key())?;

        Ok(RunnableAgent::new(
            spec.clone(),
            model,
            search,
            self.max_tool_rounds,
        ))
    }

    /// Instantiate every spec in order, stopping at the first failure
    pub fn instantiate_all(&self, credentials: &Credentials) -> MentorResult<Vec<RunnableAgent>> {
        self.specs
            .iter()
            .map(|spec| self.instantiate(spec, credentials))
            .collect()
    }
}

impl fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("specs", &self.specs)
            .field("model", &self.model.model)
            .field("max_tool_rounds", &self.max_tool_rounds)
            .finish()
    }
}
