//! Configuration management commands

use crate::commands::run::{load_settings, resolve_config_path};
use crate::console::CliConsole;
use anyhow::Context;
use colored::*;
use mentor_core::config::{
    CredentialSource, ResolvedCredentials, Settings, SettingsOverrides, mask_api_key,
};
use mentor_core::error::MentorError;
use std::path::Path;

/// Show the effective configuration
pub async fn show(
    config_file: &str,
    google_api_key: Option<&str>,
    serpapi_api_key: Option<&str>,
) -> anyhow::Result<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration");

    let path = resolve_config_path(config_file);
    if path.exists() {
        console.success(&format!("Loaded configuration from: {}", path.display()));
    } else {
        console.warn(&format!("Configuration file not found: {}", config_file));
        console.info("Using default configuration");
    }

    let settings = load_settings(config_file, SettingsOverrides::default())?;
    print_settings(&console, &settings);

    let resolved = ResolvedCredentials::resolve(google_api_key, serpapi_api_key);
    console.print_header("Credentials");
    console.print_field(
        "Google API key",
        &describe_key(resolved.credentials.model_api_key(), &resolved.model_source),
    );
    console.print_field(
        "SerpApi API key",
        &describe_key(resolved.credentials.search_api_key(), &resolved.search_source),
    );
    Ok(())
}

/// Create a configuration file with defaults
///
/// The format follows the file extension: `.toml`, `.yaml`/`.yml`, else JSON.
pub async fn init(config_file: &str, force: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration Initialization");

    if Path::new(config_file).exists() && !force {
        console.info("Use --force to overwrite");
        return Err(MentorError::config(format!(
            "Configuration file already exists: {}",
            config_file
        ))
        .into());
    }

    let contents = serialize_settings(&Settings::default(), Path::new(config_file))?;
    tokio::fs::write(config_file, contents)
        .await
        .with_context(|| format!("Failed to write configuration file {}", config_file))?;

    console.success(&format!("Created configuration file: {}", config_file));
    console.info("API keys are not stored here; set GOOGLE_API_KEY and SERPAPI_API_KEY");
    Ok(())
}

fn serialize_settings(settings: &Settings, path: &Path) -> anyhow::Result<String> {
    let contents = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            toml::to_string_pretty(settings).context("Failed to serialize configuration")?
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::to_string(settings).context("Failed to serialize configuration")?
        }
        _ => serde_json::to_string_pretty(settings).context("Failed to serialize configuration")?,
    };
    Ok(contents)
}

fn print_settings(console: &CliConsole, settings: &Settings) {
    console.print_field("Model", &settings.model.model.green().to_string());
    console.print_field("Gemini endpoint", &settings.model.base_url);
    if let Some(temperature) = settings.model.temperature {
        console.print_field("Temperature", &temperature.to_string());
    }
    console.print_field("Search endpoint", &settings.search.base_url);
    console.print_field("Search results", &settings.search.num_results.to_string());
    console.print_field(
        "Mode",
        if settings.run.parallel {
            "concurrent"
        } else {
            "sequential"
        },
    );
    let timeout = match settings.run.agent_timeout_secs {
        0 => "disabled".to_string(),
        secs => format!("{}s", secs),
    };
    console.print_field("Agent timeout", &timeout);
    console.print_field("Max tool rounds", &settings.run.max_tool_rounds.to_string());
    console.print_field(
        "Extra agents",
        &format!(
            "{}{}",
            settings.agents.len(),
            if settings.replace_team {
                " (replacing the built-in team)"
            } else {
                ""
            }
        ),
    );
    console.print_field(
        "Logging",
        &format!("{} ({})", settings.logging.level, settings.logging.format),
    );
}

fn describe_key(key: &str, source: &CredentialSource) -> String {
    match source {
        CredentialSource::Missing => "✗ Not set".red().to_string(),
        source => format!("{} {} ({})", "✓".green(), mask_api_key(key), source),
    }
}
