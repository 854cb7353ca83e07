//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands::{self, RunArgs};

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        google_api_key,
        serpapi_api_key,
        verbose,
        command,
    } = cli;

    match command {
        Commands::Run {
            topic,
            parallel,
            timeout_secs,
            model,
            max_tool_rounds,
            format,
            show_raw,
            config_file,
        } => {
            commands::run::execute(RunArgs {
                topic,
                parallel,
                timeout_secs,
                model,
                max_tool_rounds,
                format,
                show_raw,
                config_file,
                google_api_key,
                serpapi_api_key,
            })
            .await
        }
        Commands::Agents { config_file } => {
            commands::agents::show_agents(&config_file, verbose).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { config_file } => {
                commands::config::show(
                    &config_file,
                    google_api_key.as_deref(),
                    serpapi_api_key.as_deref(),
                )
                .await
            }
            ConfigAction::Init { config_file, force } => {
                commands::config::init(&config_file, force).await
            }
        },
    }
}
