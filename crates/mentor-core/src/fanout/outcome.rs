//! Per-agent results and the aggregate run outcome

use crate::agent::RawResponse;
use crate::error::{FailureKind, MentorError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How one agent's turn ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The agent answered with non-empty text
    Success { text: String },
    /// The agent failed; siblings are unaffected
    Failure { kind: FailureKind, message: String },
}

impl Outcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Classify an error raised while the agent was responding
    pub fn from_error(error: &MentorError) -> Self {
        Self::failure(FailureKind::classify(error), error.message())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Answer text on success
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Result for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    pub agent_name: String,
    pub outcome: Outcome,
    /// Wall time of the agent's turn
    pub elapsed_ms: u64,
    /// What the agent returned before normalization, if it returned at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawResponse>,
}

/// Results of one run, in configured agent order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Trimmed topic every agent received
    pub topic: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub results: Vec<AgentResult>,
}

impl RunOutcome {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, agent_name: &str) -> Option<&AgentResult> {
        self.results.iter().find(|r| r.agent_name == agent_name)
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_from_error() {
        let outcome = Outcome::from_error(&MentorError::http_status("Too many requests", 429));
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Quota));
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), None);
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let value = serde_json::to_value(Outcome::failure(FailureKind::Timeout, "late")).unwrap();
        assert_eq!(
            value,
            json!({"status": "failure", "kind": "timeout", "message": "late"})
        );

        let value = serde_json::to_value(Outcome::success("hi")).unwrap();
        assert_eq!(value, json!({"status": "success", "text": "hi"}));
    }

    #[test]
    fn test_counts() {
        let result = |name: &str, outcome| AgentResult {
            agent_name: name.to_string(),
            outcome,
            elapsed_ms: 1,
            raw: None,
        };
        let run = RunOutcome {
            topic: "Rust".to_string(),
            started_at: Utc::now(),
            elapsed_ms: 2,
            results: vec![
                result("A", Outcome::success("x")),
                result("B", Outcome::failure(FailureKind::Network, "down")),
            ],
        };
        assert_eq!(run.success_count(), 1);
        assert_eq!(run.failure_count(), 1);
        assert!(!run.all_succeeded());
        assert!(run.get("B").is_some());
    }
}
