//! Fan-out runner
//!
//! Sends one topic to every agent and collects one [`AgentResult`] per
//! agent, in the order the agents were given. A failing, hanging or
//! panicking agent only affects its own result.

use super::normalizer::normalize_detailed;
use super::outcome::{AgentResult, Outcome, RunOutcome};
use super::request::RunRequest;
use crate::agent::{RawResponse, RunnableAgent};
use crate::config::RunSettings;
use crate::error::{FailureKind, MentorError, MentorResult};
use chrono::Utc;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{Instrument, info, info_span, warn};

/// How agents are scheduled within a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// One agent after another
    #[default]
    Sequential,
    /// All agents at once, results reassembled in order
    Concurrent,
}

/// Executes a run request against a list of agents
#[derive(Debug, Clone, Default)]
pub struct FanOutRunner {
    mode: RunMode,
    agent_timeout: Option<Duration>,
}

impl FanOutRunner {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            agent_timeout: None,
        }
    }

    /// Build a runner from run settings; a zero timeout disables the bound
    pub fn from_settings(settings: &RunSettings) -> Self {
        let mode = if settings.parallel {
            RunMode::Concurrent
        } else {
            RunMode::Sequential
        };
        Self::new(mode).with_agent_timeout(
            (settings.agent_timeout_secs > 0)
                .then(|| Duration::from_secs(settings.agent_timeout_secs)),
        )
    }

    /// Bound each agent's turn
    pub fn with_agent_timeout(mut self, agent_timeout: Option<Duration>) -> Self {
        self.agent_timeout = agent_timeout;
        self
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn agent_timeout(&self) -> Option<Duration> {
        self.agent_timeout
    }

    /// Run `request` against every agent
    ///
    /// Fails only when the topic is blank, in which case no agent is
    /// invoked.
    pub async fn run(
        &self,
        request: &RunRequest,
        agents: &[RunnableAgent],
    ) -> MentorResult<RunOutcome> {
        self.run_with_progress(request, agents, |_| {}).await
    }

    /// Like [`run`](Self::run), calling `on_result` as each agent finishes
    pub async fn run_with_progress<F>(
        &self,
        request: &RunRequest,
        agents: &[RunnableAgent],
        on_result: F,
    ) -> MentorResult<RunOutcome>
    where
        F: Fn(&AgentResult) + Sync,
    {
        let topic = request.validated_topic()?;
        let started_at = Utc::now();
        let start = Instant::now();

        info!(
            topic = %topic,
            agents = agents.len(),
            mode = ?self.mode,
            "starting run"
        );

        let results = match self.mode {
            RunMode::Sequential => {
                let mut results = Vec::with_capacity(agents.len());
                for agent in agents {
                    let result = self.invoke(agent, topic).await;
                    on_result(&result);
                    results.push(result);
                }
                results
            }
            RunMode::Concurrent => {
                let on_result = &on_result;
                let futures: Vec<_> = agents
                    .iter()
                    .map(|agent| async move {
                        let result = self.invoke(agent, topic).await;
                        on_result(&result);
                        result
                    })
                    .collect();
                futures::future::join_all(futures).await
            }
        };

        let outcome = RunOutcome {
            topic: topic.to_string(),
            started_at,
            elapsed_ms: start.elapsed().as_millis() as u64,
            results,
        };

        info!(
            succeeded = outcome.success_count(),
            failed = outcome.failure_count(),
            elapsed_ms = outcome.elapsed_ms,
            "run finished"
        );
        Ok(outcome)
    }

    async fn invoke(&self, agent: &RunnableAgent, topic: &str) -> AgentResult {
        let span = info_span!("agent", name = %agent.name());
        let start = Instant::now();

        let (outcome, raw) = async {
            info!("agent started");
            let (outcome, raw) = match self.respond_guarded(agent, topic).await {
                Ok(raw) => (outcome_for(&raw), Some(raw)),
                Err(error) => (Outcome::from_error(&error), None),
            };

            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &outcome {
                Outcome::Success { .. } => info!(elapsed_ms, "agent succeeded"),
                Outcome::Failure { kind, message } => {
                    warn!(elapsed_ms, kind = %kind, error = %message, "agent failed")
                }
            }
            (outcome, raw)
        }
        .instrument(span)
        .await;

        AgentResult {
            agent_name: agent.name().to_string(),
            outcome,
            elapsed_ms: start.elapsed().as_millis() as u64,
            raw,
        }
    }

    /// Call `respond`, turning timeouts and panics into errors
    async fn respond_guarded(
        &self,
        agent: &RunnableAgent,
        topic: &str,
    ) -> MentorResult<RawResponse> {
        let call = AssertUnwindSafe(agent.respond(topic)).catch_unwind();

        let caught = match self.agent_timeout {
            Some(limit) => timeout(limit, call)
                .await
                .map_err(|_| MentorError::timeout(limit.as_secs()))?,
            None => call.await,
        };

        caught.map_err(|panic| {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            MentorError::other(format!("agent panicked: {}", detail))
        })?
    }
}

/// Success when usable text was extracted, `EmptyResponse` otherwise
///
/// A record that exposes no candidate field counts as empty: its string
/// form is a dump of the record, not an answer.
fn outcome_for(raw: &RawResponse) -> Outcome {
    let normalized = normalize_detailed(raw);
    let unmatched_record = matches!(raw, RawResponse::Record(_)) && normalized.field.is_none();

    if unmatched_record || normalized.text.trim().is_empty() {
        Outcome::failure(
            FailureKind::EmptyResponse,
            "agent returned no usable text",
        )
    } else {
        Outcome::success(normalized.text)
    }
}
