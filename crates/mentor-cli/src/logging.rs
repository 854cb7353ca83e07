//! Tracing subscriber setup

use mentor_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over the configured level; `--verbose` raises the
/// default to debug.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = if config.is_json() {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
