//! Language model integration
//!
//! Agents talk to the model through the [`ModelClient`] trait; the only
//! production implementation is the Gemini REST client.

pub mod client;
pub mod converters;
pub mod gemini;
pub mod messages;
pub mod parser;

#[cfg(test)]
mod gemini_tests;

pub use client::ModelClient;
pub use gemini::GeminiClient;
pub use messages::{LlmMessage, LlmResponse, LlmUsage, MessageRole};
