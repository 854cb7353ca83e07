//! Tool implementations for Mentor
//!
//! Provides the SerpApi web search tool and [`LiveCapabilities`], the
//! factory that binds agents to real Gemini and SerpApi clients.

pub mod capabilities;
pub mod web_search;

pub use capabilities::LiveCapabilities;
pub use web_search::{SearchResult, SerpApiSearchTool, WEB_SEARCH_TOOL, format_results};
