//! From trait implementations for MentorError conversions

use super::types::MentorError;

impl From<std::io::Error> for MentorError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for MentorError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for MentorError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout {
                message: error.to_string(),
            };
        }
        let status_code = error.status().map(|s| s.as_u16());
        // Never echo query strings, they may carry API keys.
        let url = error.url().map(|u| {
            let mut u = u.clone();
            u.set_query(None);
            u.to_string()
        });
        Self::Http {
            message: error.without_url().to_string(),
            url,
            status_code,
        }
    }
}
