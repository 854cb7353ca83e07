//! Configuration loading from files, environment and overrides

use super::settings::Settings;
use crate::error::{MentorError, MentorResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "mentor_config.json";

/// Overrides collected from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub parallel: Option<bool>,
    pub agent_timeout_secs: Option<u64>,
    pub max_tool_rounds: Option<u32>,
}

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration file; a missing file contributes nothing
    File(PathBuf),
    /// `MENTOR_*` and base URL environment variables
    Environment,
    /// Values from command line arguments
    Overrides(SettingsOverrides),
}

/// Configuration loader applying sources in the order they were added
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add command line overrides
    pub fn with_overrides(self, overrides: SettingsOverrides) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    /// Load and validate settings from all sources
    pub fn load(self) -> MentorResult<Settings> {
        let mut settings = Settings::default();

        for source in &self.sources {
            match source {
                ConfigSource::File(path) => {
                    if let Some(from_file) = load_from_file(path)? {
                        tracing::debug!("Loaded config from file: {}", path.display());
                        settings = from_file;
                    }
                }
                ConfigSource::Environment => {
                    apply_env_with(&mut settings, |name| env::var(name).ok())?;
                }
                ConfigSource::Overrides(overrides) => apply_overrides(&mut settings, overrides),
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Load settings from a file, choosing the format by extension
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_from_file(path: &Path) -> MentorResult<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        MentorError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let settings = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            MentorError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            MentorError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            MentorError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(Some(settings))
}

/// Apply environment overrides read through `lookup`
pub fn apply_env_with<F>(settings: &mut Settings, lookup: F) -> MentorResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(model) = lookup("MENTOR_MODEL").filter(|v| !v.trim().is_empty()) {
        settings.model.model = model.trim().to_string();
    }

    if let Some(parallel) = lookup("MENTOR_PARALLEL") {
        settings.run.parallel = parse_bool(&parallel).ok_or_else(|| {
            MentorError::config(format!("Invalid MENTOR_PARALLEL value '{}'", parallel))
        })?;
    }

    if let Some(timeout) = lookup("MENTOR_AGENT_TIMEOUT_SECS") {
        settings.run.agent_timeout_secs = timeout.trim().parse().map_err(|_| {
            MentorError::config_with_context(
                "Invalid MENTOR_AGENT_TIMEOUT_SECS value",
                format!("Parsing timeout value '{}'", timeout),
            )
        })?;
    }

    if let Some(url) = lookup("GEMINI_BASE_URL").filter(|v| !v.trim().is_empty()) {
        settings.model.base_url = url.trim().to_string();
    }

    if let Some(url) = lookup("SERPAPI_BASE_URL").filter(|v| !v.trim().is_empty()) {
        settings.search.base_url = url.trim().to_string();
    }

    Ok(())
}

fn apply_overrides(settings: &mut Settings, overrides: &SettingsOverrides) {
    if let Some(model) = &overrides.model {
        settings.model.model = model.clone();
    }
    if let Some(parallel) = overrides.parallel {
        settings.run.parallel = parallel;
    }
    if let Some(timeout) = overrides.agent_timeout_secs {
        settings.run.agent_timeout_secs = timeout;
    }
    if let Some(rounds) = overrides.max_tool_rounds {
        settings.run.max_tool_rounds = rounds;
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Global config location, `~/.mentor/mentor_config.json`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mentor").join(DEFAULT_CONFIG_FILE))
}
