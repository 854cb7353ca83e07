//! Response normalization
//!
//! Turns whatever an agent returned into display text. Total over every
//! [`RawResponse`] shape: it never fails and always yields a string.

use crate::agent::RawResponse;
use serde_json::Value;

/// Record fields probed for the answer text, in priority order
pub const CANDIDATE_FIELDS: [&str; 4] = ["content", "text", "output", "message"];

/// Normalized text plus the record field it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// `None` when the text is the string form of the whole response
    pub field: Option<&'static str>,
}

/// Normalize a raw response to text
pub fn normalize(raw: &RawResponse) -> String {
    normalize_detailed(raw).text
}

/// Normalize a raw response, reporting which field matched
pub fn normalize_detailed(raw: &RawResponse) -> Normalized {
    if let RawResponse::Record(map) = raw {
        for field in CANDIDATE_FIELDS {
            if let Some(value) = map.get(field).filter(|v| is_truthy(v)) {
                return Normalized {
                    text: coerce(value),
                    field: Some(field),
                };
            }
        }
    }

    Normalized {
        text: raw.to_string(),
        field: None,
    }
}

/// Whether a JSON value counts as present
///
/// Null, `false`, zero and empty strings, arrays or objects do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
