//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Whether log lines should be emitted as JSON objects
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.is_json());
    }

    #[test]
    fn test_logging_config_partial_json() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "JSON"}"#).unwrap();
        assert_eq!(config.level, "warn");
        assert!(config.is_json());
    }
}
