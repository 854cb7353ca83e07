//! Centralized timeout defaults
//!
//! All values are seconds and can be overridden via configuration.

/// Default timeout values for model provider calls
pub mod llm {
    /// Default connection timeout for the model API (30 seconds)
    pub const CONNECTION_SECS: u64 = 30;

    /// Default request timeout for a single model call (60 seconds)
    pub const REQUEST_SECS: u64 = 60;
}

/// Default timeout values for the search tool
pub mod search {
    /// Default timeout for a search request (15 seconds)
    pub const REQUEST_SECS: u64 = 15;
}

/// Default bounds for a whole agent turn
pub mod agent {
    /// Upper bound on one agent's `respond`, tool rounds included (2 minutes)
    pub const RESPOND_SECS: u64 = 120;
}
