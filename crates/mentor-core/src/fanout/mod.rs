//! Fan-out of one topic to many agents

pub mod normalizer;
pub mod outcome;
pub mod request;
pub mod runner;

pub use normalizer::{CANDIDATE_FIELDS, Normalized, normalize, normalize_detailed};
pub use outcome::{AgentResult, Outcome, RunOutcome};
pub use request::RunRequest;
pub use runner::{FanOutRunner, RunMode};
