//! `mentor run` implementation

use crate::args::OutputFormat;
use crate::progress::RunProgress;
use crate::render;
use anyhow::Context;
use mentor_core::config::loader::global_config_path;
use mentor_core::config::{ConfigLoader, ResolvedCredentials, Settings, SettingsOverrides};
use mentor_core::error::MentorError;
use mentor_core::fanout::{FanOutRunner, RunOutcome, RunRequest};
use mentor_core::AgentRegistry;
use mentor_tools::LiveCapabilities;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for a run, gathered from the command line
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub topic: String,
    pub parallel: bool,
    pub timeout_secs: Option<u64>,
    pub model: Option<String>,
    pub max_tool_rounds: Option<u32>,
    pub format: OutputFormat,
    pub show_raw: Option<String>,
    pub config_file: String,
    pub google_api_key: Option<String>,
    pub serpapi_api_key: Option<String>,
}

impl RunArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            model: self.model.clone(),
            parallel: self.parallel.then_some(true),
            agent_timeout_secs: self.timeout_secs,
            max_tool_rounds: self.max_tool_rounds,
        }
    }
}

/// Config file a command should read
///
/// Falls back to `~/.mentor/mentor_config.json` when the given file does
/// not exist.
pub fn resolve_config_path(config_file: &str) -> PathBuf {
    resolve_config_path_with(config_file, global_config_path())
}

fn resolve_config_path_with(config_file: &str, global: Option<PathBuf>) -> PathBuf {
    let local = PathBuf::from(config_file);
    if local.exists() {
        return local;
    }
    match global.filter(|p| p.exists()) {
        Some(global) => {
            tracing::debug!("Using global config at {}", global.display());
            global
        }
        None => local,
    }
}

/// Load layered settings for a run
pub fn load_settings(config_file: &str, overrides: SettingsOverrides) -> anyhow::Result<Settings> {
    let path = resolve_config_path(config_file);
    let settings = ConfigLoader::new()
        .with_file(&path)
        .with_env()
        .with_overrides(overrides)
        .load()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    Ok(settings)
}

/// Ask every agent about the topic and print their answers
///
/// Configuration and validation problems are errors; agents that fail
/// during the run are shown in their panels and do not fail the command.
pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.config_file, args.overrides())?;
    execute_with_settings(args, settings).await
}

async fn execute_with_settings(args: RunArgs, settings: Settings) -> anyhow::Result<()> {
    let request = RunRequest::new(&args.topic);
    request.validated_topic()?;

    let registry = AgentRegistry::from_settings(&settings, Arc::new(LiveCapabilities))?;
    if let Some(name) = &args.show_raw {
        if registry.get(name).is_none() {
            return Err(MentorError::validation_field(
                format!("no agent named '{}' is configured", name),
                "show_raw",
            )
            .into());
        }
    }

    let resolved = ResolvedCredentials::resolve(
        args.google_api_key.as_deref(),
        args.serpapi_api_key.as_deref(),
    );
    let agents = registry
        .instantiate_all(&resolved.credentials)
        .context("Could not set up the agents")?;

    let runner = FanOutRunner::from_settings(&settings.run);
    tracing::info!(
        mode = ?runner.mode(),
        timeout = ?runner.agent_timeout(),
        "running {} agents",
        agents.len()
    );

    let show_spinner = args.format == OutputFormat::Text && std::io::stderr().is_terminal();
    let progress = RunProgress::start(agents.len(), show_spinner);
    let outcome = runner
        .run_with_progress(&request, &agents, |result| progress.agent_finished(result))
        .await;
    progress.finish();
    let outcome = outcome?;

    print_outcome(&outcome, &registry, &args)
}

fn print_outcome(
    outcome: &RunOutcome,
    registry: &AgentRegistry,
    args: &RunArgs,
) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Json => {
            let json = render::render_json(outcome, args.show_raw.as_deref())
                .context("Failed to serialize run outcome")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render::render_text(outcome, registry.specs()));
            if let Some(agent) = &args.show_raw {
                println!();
                print!("{}", render::render_raw(outcome, agent));
            }
        }
    }
    Ok(())
}
