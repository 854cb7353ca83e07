//! CLI argument definitions using clap
//!
//! - mentor run "topic"          # Ask the whole team about a topic
//! - mentor agents               # List the configured agents
//! - mentor config show|init     # Inspect or create a config file

use clap::{Parser, Subcommand, ValueEnum};
use mentor_core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "mentor")]
#[command(about = "Mentor - a team of AI teaching agents for any topic")]
#[command(
    long_about = r#"Mentor - a team of AI teaching agents for any topic

A Professor, an Academic Advisor, a Research Librarian and a Teaching
Assistant each work on the same topic and report back in their own panel.

USAGE:
  mentor run "Linear Algebra"            # Ask the team, one agent at a time
  mentor run "Linear Algebra" --parallel # Ask every agent at once
  mentor agents                          # List the team
  mentor config init                     # Create a config file

Keys are read from --google-api-key / --serpapi-api-key, then from
GOOGLE_API_KEY / SERPAPI_API_KEY (a .env file is loaded if present)."#
)]
#[command(version)]
pub struct Cli {
    /// Google Gemini API key
    #[arg(long, global = true)]
    pub google_api_key: Option<String>,

    /// SerpApi API key for agents that search the web
    #[arg(long, global = true)]
    pub serpapi_api_key: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file named by the selected subcommand
    pub fn config_file(&self) -> &str {
        match &self.command {
            Commands::Run { config_file, .. } | Commands::Agents { config_file } => config_file,
            Commands::Config { action } => match action {
                ConfigAction::Show { config_file } | ConfigAction::Init { config_file, .. } => {
                    config_file
                }
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a topic to every agent and show their answers
    Run {
        /// Topic to study, e.g. "Linear Algebra"
        topic: String,

        /// Invoke agents concurrently instead of one after another
        #[arg(long)]
        parallel: bool,

        /// Per-agent timeout in seconds (0 disables)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Gemini model identifier
        #[arg(long)]
        model: Option<String>,

        /// Maximum search rounds per agent
        #[arg(long)]
        max_tool_rounds: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also print the raw response captured for this agent
        #[arg(long, value_name = "AGENT")]
        show_raw: Option<String>,

        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },

    /// List the configured agents
    Agents {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file (.json, .toml or .yaml)
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One panel per agent
    Text,
    /// The whole run outcome as JSON
    Json,
}
