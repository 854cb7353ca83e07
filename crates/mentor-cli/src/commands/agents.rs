//! `mentor agents` implementation

use crate::commands::run::load_settings;
use crate::console::CliConsole;
use colored::*;
use mentor_core::config::SettingsOverrides;
use mentor_core::AgentRegistry;
use mentor_tools::LiveCapabilities;
use std::sync::Arc;

/// List the configured agents in run order
pub async fn show_agents(config_file: &str, verbose: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);
    let settings = load_settings(config_file, SettingsOverrides::default())?;
    let registry = AgentRegistry::from_settings(&settings, Arc::new(LiveCapabilities))?;

    console.print_header("Agents");

    for (index, spec) in registry.specs().iter().enumerate() {
        let search = if spec.uses_search_tool {
            " [web search]".magenta().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {} - {}{}",
            format!("{}.", index + 1).dimmed(),
            spec.panel_heading().bold(),
            spec.role,
            search
        );
        for instruction in &spec.instructions {
            console.detail(&format!("- {}", instruction));
        }
    }

    println!();
    console.info(&format!("Total agents: {}", registry.len()));
    if !verbose {
        console.info("Use --verbose to see each agent's instructions");
    }
    Ok(())
}
