//! Error types for the Mentor agent team
//!
//! Configuration and validation errors stop a run before any agent is
//! invoked. Everything an agent raises while responding is folded into a
//! [`FailureKind`] by the fan-out runner and never aborts its siblings.

mod classifiers;
mod constructors;
mod conversions;
mod types;

pub use classifiers::FailureKind;
pub use types::{MentorError, MentorResult};
