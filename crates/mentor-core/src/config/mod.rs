//! Configuration management for Mentor
//!
//! Settings are layered: built-in defaults, then a config file (JSON, TOML
//! or YAML by extension), then `MENTOR_*` environment variables, then
//! command-line overrides. Credentials are resolved separately and never
//! written back to disk.

pub mod credentials;
pub mod loader;
pub mod logging_config;
pub mod settings;
pub mod timeouts;

pub use credentials::{
    CredentialSource, Credentials, MODEL_API_KEY_ENV, ResolvedCredentials, SEARCH_API_KEY_ENV,
    mask_api_key,
};
pub use loader::{ConfigLoader, ConfigSource, DEFAULT_CONFIG_FILE, SettingsOverrides};
pub use logging_config::LoggingConfig;
pub use settings::{ModelSettings, RunSettings, SearchSettings, Settings};
