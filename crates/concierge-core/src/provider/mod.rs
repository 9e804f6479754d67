//! Completion Providers
//!
//! Common interface for completion backends (Gemini, Ollama, the in-process
//! mock) so the concierge works with any of them without code changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concierge_core::provider::{GenerationOptions, LlmProvider};
//!
//! let provider = GeminiProvider::from_env();
//! let completion = provider.complete(&messages, &GenerationOptions::default()).await?;
//! ```

mod mock;

pub use mock::MockProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Sampling configuration for a completion call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gemini-3-flash-preview", "llama3.2")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Top-p nucleus sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const fn default_temperature() -> f32 { 0.7 }
const fn default_max_tokens() -> u32 { 1024 }
const fn default_top_p() -> f32 { 0.95 }

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text
    pub content: String,

    /// Model that generated this response
    pub model: String,

    /// Token usage statistics (if available)
    pub usage: Option<TokenUsage>,

    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

/// Token usage statistics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reason for completion finishing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Error,
}

/// Information about a model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub context_length: Option<u32>,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new backends.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider name for logs and health output
    fn name(&self) -> &str;

    /// Model used when the caller does not override it
    fn default_model(&self) -> &str;

    /// Check if the provider is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion from messages (system instruction first, if any)
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;

    /// List available models
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
        assert!((opts.top_p - 0.95).abs() < f32::EPSILON);
        assert_eq!(opts.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_generation_options_partial_json() {
        let opts: GenerationOptions = serde_json::from_str(r#"{"model":"llama3.2"}"#).unwrap();
        assert_eq!(opts.model, "llama3.2");
        assert_eq!(opts.max_tokens, 1024);
    }
}
