//! Progress spinner shown while agents work

use indicatif::{ProgressBar, ProgressStyle};
use mentor_core::fanout::AgentResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Spinner on stderr counting finished agents
pub struct RunProgress {
    bar: Option<ProgressBar>,
    total: usize,
    finished: AtomicUsize,
}

impl RunProgress {
    /// Start the spinner; a hidden progress does nothing
    pub fn start(total: usize, visible: bool) -> Self {
        let bar = visible.then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}")
            {
                pb.set_style(style);
            }
            pb.set_message(format!("Agents are working together... (0/{})", total));
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });

        Self {
            bar,
            total,
            finished: AtomicUsize::new(0),
        }
    }

    /// Record one finished agent
    pub fn agent_finished(&self, result: &AgentResult) {
        let done = self.finished.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(bar) = &self.bar {
            let mark = if result.outcome.is_success() { "✓" } else { "✗" };
            bar.set_message(format!(
                "Agents are working together... ({}/{}) {} {}",
                done, self.total, mark, result.agent_name
            ));
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
