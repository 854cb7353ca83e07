//! Classification of agent invocation errors

use super::types::MentorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a single agent failed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection could not be established or was dropped
    Network,
    /// The provider rejected the credentials
    Authentication,
    /// Rate limit or quota exhausted
    Quota,
    /// Provider-side failure or malformed provider response
    Provider,
    /// The agent did not answer within the configured bound
    Timeout,
    /// The search tool failed while the model was using it
    Tool,
    /// The agent answered but no text could be extracted
    EmptyResponse,
    /// Anything else
    Other,
}

impl FailureKind {
    /// Map an error raised while an agent was responding to a failure kind
    pub fn classify(error: &MentorError) -> Self {
        match error {
            MentorError::Http {
                status_code: Some(status),
                message,
                ..
            } => match *status {
                401 | 403 => Self::Authentication,
                429 => Self::Quota,
                // Gemini answers a bad key with 400 INVALID_ARGUMENT
                400 if message.to_lowercase().contains("api key") => Self::Authentication,
                _ => Self::Provider,
            },
            MentorError::Http {
                status_code: None, ..
            } => Self::Network,
            MentorError::Llm { message, .. } => {
                let lower = message.to_lowercase();
                if lower.contains("api key") || lower.contains("unauthorized") {
                    Self::Authentication
                } else if lower.contains("quota") || lower.contains("rate limit") {
                    Self::Quota
                } else {
                    Self::Provider
                }
            }
            MentorError::Json { .. } => Self::Provider,
            MentorError::Timeout { .. } => Self::Timeout,
            MentorError::Tool { .. } => Self::Tool,
            MentorError::Config { .. }
            | MentorError::Validation { .. }
            | MentorError::Io { .. }
            | MentorError::Other { .. } => Self::Other,
        }
    }

    /// Short label used by the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Authentication => "authentication",
            Self::Quota => "quota",
            Self::Provider => "provider",
            Self::Timeout => "timeout",
            Self::Tool => "tool",
            Self::EmptyResponse => "empty response",
            Self::Other => "error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_classification() {
        assert_eq!(
            FailureKind::classify(&MentorError::http_status("denied", 401)),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&MentorError::http_status("denied", 403)),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&MentorError::http_status("slow down", 429)),
            FailureKind::Quota
        );
        assert_eq!(
            FailureKind::classify(&MentorError::http_status("API key not valid", 400)),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&MentorError::http_status("boom", 503)),
            FailureKind::Provider
        );
        assert_eq!(
            FailureKind::classify(&MentorError::network("connection refused")),
            FailureKind::Network
        );
    }

    #[test]
    fn test_other_classifications() {
        assert_eq!(
            FailureKind::classify(&MentorError::timeout(30)),
            FailureKind::Timeout
        );
        assert_eq!(
            FailureKind::classify(&MentorError::tool("web_search", "bad key")),
            FailureKind::Tool
        );
        assert_eq!(
            FailureKind::classify(&MentorError::llm("Resource quota exceeded")),
            FailureKind::Quota
        );
        assert_eq!(
            FailureKind::classify(&MentorError::llm("No candidates in response")),
            FailureKind::Provider
        );
        assert_eq!(
            FailureKind::classify(&MentorError::other("?")),
            FailureKind::Other
        );
    }

    #[test]
    fn test_fatal_errors() {
        assert!(MentorError::config("missing key").is_fatal());
        assert!(MentorError::validation("blank topic").is_fatal());
        assert!(!MentorError::timeout(5).is_fatal());
    }
}
