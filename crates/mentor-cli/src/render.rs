//! Presentation of run outcomes
//!
//! Text output prints one panel per agent in configured order. JSON output
//! serializes the whole [`RunOutcome`].

use colored::*;
use mentor_core::agent::AgentSpec;
use mentor_core::fanout::{AgentResult, Outcome, RunOutcome};

const RULE_WIDTH: usize = 60;

/// Render every agent panel followed by a one-line summary
pub fn render_text(outcome: &RunOutcome, specs: &[AgentSpec]) -> String {
    let mut out = String::new();

    for result in &outcome.results {
        let heading = specs
            .iter()
            .find(|spec| spec.name == result.agent_name)
            .map(AgentSpec::panel_heading)
            .unwrap_or(result.agent_name.as_str());
        out.push_str(&render_panel(heading, result));
        out.push('\n');
    }

    let summary = format!(
        "{}/{} agents answered \"{}\" in {:.1}s",
        outcome.success_count(),
        outcome.len(),
        outcome.topic,
        outcome.elapsed_ms as f64 / 1000.0
    );
    if outcome.all_succeeded() {
        out.push_str(&summary.green().to_string());
    } else {
        out.push_str(&summary.yellow().to_string());
    }
    out.push('\n');
    out
}

fn render_panel(heading: &str, result: &AgentResult) -> String {
    let title = format!(" {} ", heading);
    let pad = RULE_WIDTH.saturating_sub(title.chars().count() + 3);
    let mut panel = format!(
        "{}{}{}\n",
        "━━━".cyan(),
        title.bold(),
        "━".repeat(pad).cyan()
    );

    match &result.outcome {
        Outcome::Success { text } => {
            panel.push_str(text.trim_end());
            panel.push('\n');
        }
        Outcome::Failure { kind, message } => {
            panel.push_str(&format!(
                "{} {}\n",
                format!("✗ {} failed ({}):", result.agent_name, kind).red().bold(),
                message.red()
            ));
        }
    }

    panel.push_str(&format!(
        "{}\n",
        format!("{} ms", result.elapsed_ms).dimmed()
    ));
    panel
}

/// Pretty JSON of the outcome, keeping the raw response only for `show_raw`
pub fn render_json(outcome: &RunOutcome, show_raw: Option<&str>) -> serde_json::Result<String> {
    let mut view = outcome.clone();
    for result in &mut view.results {
        if show_raw != Some(result.agent_name.as_str()) {
            result.raw = None;
        }
    }
    serde_json::to_string_pretty(&view)
}

/// The raw response captured for `agent` during the run
pub fn render_raw(outcome: &RunOutcome, agent: &str) -> String {
    let header = format!("Raw response from {}", agent).bold().to_string();
    let body = match outcome.get(agent).and_then(|r| r.raw.as_ref()) {
        Some(raw) => serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string()),
        None => "(no response captured: the agent failed before answering)".to_string(),
    };
    format!("{}\n{}\n", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mentor_core::agent::RawResponse;
    use mentor_core::error::FailureKind;
    use serde_json::json;

    fn sample_outcome() -> RunOutcome {
        RunOutcome {
            topic: "Linear Algebra".to_string(),
            started_at: Utc::now(),
            elapsed_ms: 2500,
            results: vec![
                AgentResult {
                    agent_name: "Professor".to_string(),
                    outcome: Outcome::success("Vectors and matrices.\n"),
                    elapsed_ms: 1200,
                    raw: Some(RawResponse::from(json!({"content": "Vectors and matrices.\n"}))),
                },
                AgentResult {
                    agent_name: "Research Librarian".to_string(),
                    outcome: Outcome::failure(FailureKind::Quota, "Too many requests"),
                    elapsed_ms: 80,
                    raw: None,
                },
            ],
        }
    }

    #[test]
    fn test_render_text_panels_in_order() {
        colored::control::set_override(false);
        let specs = vec![
            AgentSpec::new("Professor", "Teacher").with_heading("📚 Professor's Knowledge Base"),
        ];
        let text = render_text(&sample_outcome(), &specs);

        let professor = text.find("📚 Professor's Knowledge Base").unwrap();
        let librarian = text.find(" Research Librarian ").unwrap();
        assert!(professor < librarian);
        assert!(text.contains("Vectors and matrices.\n"));
        assert!(text.contains("✗ Research Librarian failed (quota): Too many requests"));
        assert!(text.contains("1/2 agents answered \"Linear Algebra\" in 2.5s"));
    }

    #[test]
    fn test_render_json_strips_raw() {
        let json = render_json(&sample_outcome(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["outcome"]["status"], "success");
        assert_eq!(value["results"][1]["outcome"]["kind"], "quota");
        assert!(value["results"][0].get("raw").is_none());

        let json = render_json(&sample_outcome(), Some("Professor")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["results"][0]["raw"]["content"],
            "Vectors and matrices.\n"
        );
    }

    #[test]
    fn test_render_raw() {
        colored::control::set_override(false);
        let outcome = sample_outcome();
        assert!(render_raw(&outcome, "Professor").contains("\"content\""));
        assert!(render_raw(&outcome, "Research Librarian").contains("no response captured"));
    }
}
