//! Credential resolution
//!
//! Keys are looked up in priority order: command-line argument first, then
//! environment variable. A value that is empty after trimming counts as
//! missing and resolution falls through to the next source.

use std::env;
use std::fmt;

/// Environment variable holding the model provider key
pub const MODEL_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable holding the search provider key
pub const SEARCH_API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// Provider credentials supplied by the caller for one run
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    model_api_key: String,
    search_api_key: String,
}

impl Credentials {
    /// Create credentials, trimming surrounding whitespace from both keys
    pub fn new(model_api_key: impl AsRef<str>, search_api_key: impl AsRef<str>) -> Self {
        Self {
            model_api_key: model_api_key.as_ref().trim().to_string(),
            search_api_key: search_api_key.as_ref().trim().to_string(),
        }
    }

    /// Key for the language model provider
    pub fn model_api_key(&self) -> &str {
        &self.model_api_key
    }

    /// Key for the web search provider
    pub fn search_api_key(&self) -> &str {
        &self.search_api_key
    }

    pub fn has_model_key(&self) -> bool {
        !self.model_api_key.is_empty()
    }

    pub fn has_search_key(&self) -> bool {
        !self.search_api_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("model_api_key", &mask_api_key(&self.model_api_key))
            .field("search_api_key", &mask_api_key(&self.search_api_key))
            .finish()
    }
}

/// Where a credential value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// From a command-line argument
    CliArgument { arg_name: String },
    /// From an environment variable (including a loaded `.env` file)
    Environment { var_name: String },
    /// Not supplied anywhere
    Missing,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::CliArgument { arg_name } => write!(f, "argument {}", arg_name),
            CredentialSource::Environment { var_name } => write!(f, "env {}", var_name),
            CredentialSource::Missing => write!(f, "not set"),
        }
    }
}

/// Credentials together with the source of each key
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub credentials: Credentials,
    pub model_source: CredentialSource,
    pub search_source: CredentialSource,
}

impl ResolvedCredentials {
    /// Resolve both keys from arguments and the process environment
    pub fn resolve(model_arg: Option<&str>, search_arg: Option<&str>) -> Self {
        Self::resolve_with(model_arg, search_arg, |name| env::var(name).ok())
    }

    /// Resolve both keys using `lookup` in place of the process environment
    pub fn resolve_with<F>(model_arg: Option<&str>, search_arg: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (model_key, model_source) =
            resolve_key(model_arg, "--google-api-key", MODEL_API_KEY_ENV, &lookup);
        let (search_key, search_source) =
            resolve_key(search_arg, "--serpapi-api-key", SEARCH_API_KEY_ENV, &lookup);

        tracing::debug!(
            model = %model_source,
            search = %search_source,
            "resolved credential sources"
        );

        Self {
            credentials: Credentials::new(model_key, search_key),
            model_source,
            search_source,
        }
    }
}

fn resolve_key<F>(
    arg: Option<&str>,
    arg_name: &str,
    var_name: &str,
    lookup: &F,
) -> (String, CredentialSource)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = arg.map(str::trim).filter(|v| !v.is_empty()) {
        return (
            value.to_string(),
            CredentialSource::CliArgument {
                arg_name: arg_name.to_string(),
            },
        );
    }

    match lookup(var_name) {
        Some(value) if !value.trim().is_empty() => (
            value.trim().to_string(),
            CredentialSource::Environment {
                var_name: var_name.to_string(),
            },
        ),
        _ => (String::new(), CredentialSource::Missing),
    }
}

/// Mask an API key for display, keeping a short prefix and suffix
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        // Too short to mask meaningfully
        return "*".repeat(len);
    }

    let prefix: String = chars[..8].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}
