//! Mentor CLI application
//!
//! Sends one topic to a team of teaching agents and prints each agent's
//! answer in its own panel.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/mentor-cli
//! ```
//!
//! # Usage
//!
//! ```bash
//! export GOOGLE_API_KEY=...
//! export SERPAPI_API_KEY=...
//! mentor run "Linear Algebra"
//! mentor run "Linear Algebra" --parallel --format json
//! ```

mod args;
mod commands;
mod console;
mod logging;
mod progress;
mod render;
mod router;

use args::Cli;
use clap::Parser;
use console::CliConsole;
use commands::run::resolve_config_path;
use mentor_core::config::{LoggingConfig, loader::load_from_file};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Keys may live in a local .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Errors in the file itself are reported by the command
    let logging_config = load_from_file(&resolve_config_path(cli.config_file()))
        .ok()
        .flatten()
        .map(|settings| settings.logging)
        .unwrap_or_else(LoggingConfig::default);
    logging::init(&logging_config, cli.verbose);

    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CliConsole::new(false).error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
