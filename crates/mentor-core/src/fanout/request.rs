//! Run requests

use crate::error::{MentorError, MentorResult};
use serde::{Deserialize, Serialize};

/// A topic to send to every agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub topic: String,
}

impl RunRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }

    /// The trimmed topic, or a validation error if nothing is left
    pub fn validated_topic(&self) -> MentorResult<&str> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(MentorError::validation_field(
                "topic must not be empty",
                "topic",
            ));
        }
        Ok(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_trimmed() {
        let request = RunRequest::new("  Linear Algebra \n");
        assert_eq!(request.validated_topic().unwrap(), "Linear Algebra");
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        for topic in ["", "   ", "\t\n"] {
            let err = RunRequest::new(topic).validated_topic().unwrap_err();
            assert!(matches!(err, MentorError::Validation { .. }));
        }
    }
}
