//! # concierge-runtime
//!
//! Completion providers for the OceanView concierge.
//!
//! ## Providers
//!
//! - **Gemini** (default): Google Generative Language API, key from `GEMINI_API_KEY`
//! - **Ollama**: local inference via Ollama
//! - **Mock**: scripted in-process replies (`concierge_core::provider::MockProvider`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concierge_runtime::{ProviderKind, build_provider};
//!
//! let provider = build_provider(ProviderKind::from_env()?);
//! let concierge = Concierge::with_defaults(provider);
//! ```

#[cfg(feature = "gemini")]
mod http;

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiConfig, GeminiProvider};

#[cfg(feature = "ollama")]
pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use concierge_core::{
    ChatSession, Concierge, ConciergeError, LlmProvider, Message, Reply, Result, Role,
    provider::MockProvider,
};

/// Which backend answers chat turns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    #[cfg(feature = "gemini")]
    Gemini,
    #[cfg(feature = "ollama")]
    Ollama,
    Mock,
}

impl ProviderKind {
    /// Parse a provider name (`gemini`, `ollama`, `mock`)
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            #[cfg(feature = "gemini")]
            "gemini" => Ok(Self::Gemini),
            #[cfg(feature = "ollama")]
            "ollama" => Ok(Self::Ollama),
            "mock" => Ok(Self::Mock),
            other => Err(ConciergeError::Config(format!("Unknown provider: {other}"))),
        }
    }

    /// Read `CONCIERGE_PROVIDER`, defaulting to Gemini
    pub fn from_env() -> Result<Self> {
        std::env::var("CONCIERGE_PROVIDER").map_or_else(|_| Ok(Self::default()), |v| Self::parse(&v))
    }
}

impl Default for ProviderKind {
    #[cfg(feature = "gemini")]
    fn default() -> Self {
        Self::Gemini
    }

    #[cfg(not(feature = "gemini"))]
    fn default() -> Self {
        Self::Mock
    }
}

/// Build the provider for `kind` from environment configuration
pub fn build_provider(kind: ProviderKind) -> Arc<dyn LlmProvider> {
    match kind {
        #[cfg(feature = "gemini")]
        ProviderKind::Gemini => Arc::new(GeminiProvider::from_env()),
        #[cfg(feature = "ollama")]
        ProviderKind::Ollama => Arc::new(OllamaProvider::from_env()),
        ProviderKind::Mock => Arc::new(MockProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider() {
        assert_eq!(ProviderKind::parse(" MOCK ").unwrap(), ProviderKind::Mock);
        assert!(matches!(
            ProviderKind::parse("openai"),
            Err(ConciergeError::Config(_))
        ));
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn test_parse_gemini() {
        assert_eq!(ProviderKind::parse("Gemini").unwrap(), ProviderKind::Gemini);
    }

    #[cfg(feature = "ollama")]
    #[test]
    fn test_parse_ollama() {
        assert_eq!(ProviderKind::parse(" ollama ").unwrap(), ProviderKind::Ollama);
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn test_default_is_gemini() {
        assert_eq!(ProviderKind::default(), ProviderKind::Gemini);
    }

    #[cfg(not(feature = "gemini"))]
    #[test]
    fn test_default_without_gemini_is_mock() {
        assert_eq!(ProviderKind::default(), ProviderKind::Mock);
    }

    #[cfg(not(feature = "ollama"))]
    #[test]
    fn test_ollama_rejected_when_disabled() {
        assert!(ProviderKind::parse("ollama").is_err());
    }

    #[test]
    fn test_build_mock() {
        let provider = build_provider(ProviderKind::Mock);
        assert_eq!(provider.name(), "Mock");
    }
}
