//! Ollama LLM Provider
//!
//! Implementation of `LlmProvider` for local Ollama inference through the
//! `ollama-rs` client.

use async_trait::async_trait;
use concierge_core::{
    error::{ConciergeError, Result},
    message::{Message, Role},
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, ModelInfo, TokenUsage},
};
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, ChatMessageResponse, MessageRole, request::ChatMessageRequest},
    models::ModelOptions,
};

const DEFAULT_HOST: &str = "http://localhost";

/// Ollama provider configuration
#[derive(Clone, Debug)]
pub struct OllamaConfig {
    /// Ollama host URL
    pub host: String,

    /// Ollama port
    pub port: u16,

    /// Default model
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: 11434,
            model: "llama3.2".into(),
        }
    }
}

impl OllamaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("OLLAMA_HOST").unwrap_or(defaults.host),
            port: lookup("OLLAMA_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            model: lookup("OLLAMA_MODEL").unwrap_or(defaults.model),
        }
    }
}

/// Ollama LLM provider
pub struct OllamaProvider {
    client: Ollama,
    config: OllamaConfig,
}

impl OllamaProvider {
    /// Create a new Ollama provider with custom host/port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::from_config(OllamaConfig {
            host: host.into(),
            port,
            ..Default::default()
        })
    }

    /// Create from configuration
    pub fn from_config(mut config: OllamaConfig) -> Self {
        // The client rejects hosts that are not absolute URLs
        if reqwest::Url::parse(&config.host).is_err() {
            tracing::warn!(host = %config.host, "Invalid OLLAMA_HOST, using {DEFAULT_HOST}");
            config.host = DEFAULT_HOST.into();
        }
        Self {
            client: Ollama::new(config.host.clone(), config.port),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(OllamaConfig::from_env())
    }

    /// Convert concierge messages to Ollama format
    fn convert_messages(messages: &[Message]) -> Vec<ChatMessage> {
        messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::System => MessageRole::System,
                    Role::User => MessageRole::User,
                    Role::Assistant => MessageRole::Assistant,
                };
                ChatMessage::new(role, m.text.clone())
            })
            .collect()
    }

    /// Build Ollama model options
    fn build_options(opts: &GenerationOptions) -> ModelOptions {
        ModelOptions::default()
            .temperature(opts.temperature)
            .top_p(opts.top_p)
            .num_predict(i32::try_from(opts.max_tokens).unwrap_or(i32::MAX))
    }

    /// Token counts from the final response stats, when Ollama reports them
    fn usage(response: &ChatMessageResponse) -> Option<TokenUsage> {
        let stats = serde_json::to_value(response.final_data.as_ref()?).ok()?;
        let count = |key: &str| {
            stats
                .get(key)
                .and_then(serde_json::Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0)
        };
        let prompt_tokens = count("prompt_eval_count");
        let completion_tokens = count("eval_count");
        Some(TokenUsage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        })
    }

    /// Convert Ollama response to a completion
    fn convert_completion(response: ChatMessageResponse, model: &str) -> Completion {
        let usage = Self::usage(&response);
        Completion {
            content: response.message.content,
            model: if response.model.is_empty() {
                model.to_string()
            } else {
                response.model
            },
            usage,
            finish_reason: Some(FinishReason::Stop),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "Ollama"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn health_check(&self) -> Result<bool> {
        match self.client.list_local_models().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Ollama health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let model = if options.model.is_empty() {
            self.config.model.as_str()
        } else {
            options.model.as_str()
        };

        let request = ChatMessageRequest::new(model.to_string(), Self::convert_messages(messages))
            .options(Self::build_options(options));

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| ConciergeError::Provider(format!("Ollama: {e}")))?;

        Ok(Self::convert_completion(response, model))
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let models = self
            .client
            .list_local_models()
            .await
            .map_err(|e| ConciergeError::ProviderUnavailable(format!("Ollama: {e}")))?;

        Ok(models
            .into_iter()
            .map(|m| ModelInfo {
                id: m.name.clone(),
                name: m.name,
                context_length: None, // Not exposed by Ollama API
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;

    fn provider_for(base: &str) -> OllamaProvider {
        let (host, port) = base.rsplit_once(':').unwrap();
        OllamaProvider::new(host, port.parse().unwrap())
    }

    #[test]
    fn test_config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.host, "http://localhost");
        assert_eq!(config.port, 11434);
        assert_eq!(config.model, "llama3.2");
    }

    #[test]
    fn test_config_from_lookup() {
        let config = OllamaConfig::from_lookup(|key| match key {
            "OLLAMA_PORT" => Some("not-a-port".into()),
            "OLLAMA_MODEL" => Some("qwen2.5".into()),
            _ => None,
        });
        assert_eq!(config.port, 11434);
        assert_eq!(config.model, "qwen2.5");
    }

    #[test]
    fn test_invalid_host_falls_back() {
        let provider = OllamaProvider::new("not a url", 11434);
        assert_eq!(provider.config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_message_conversion() {
        let messages = vec![
            Message::system("You are helpful."),
            Message::user("Hello"),
            Message::assistant("Ayubowan!"),
        ];

        let converted = OllamaProvider::convert_messages(&messages);
        assert_eq!(converted.len(), 3);
        assert!(matches!(converted[0].role, MessageRole::System));
        assert!(matches!(converted[2].role, MessageRole::Assistant));
        assert_eq!(converted[1].content, "Hello");
    }

    #[tokio::test]
    async fn test_complete_round_trip() {
        let (base, request) = serve_once(
            200,
            r#"{"model":"llama3.2","created_at":"2025-01-01T00:00:00Z","message":{"role":"assistant","content":"Breakfast is included."},"done":true,"total_duration":10,"load_duration":1,"prompt_eval_count":20,"prompt_eval_duration":2,"eval_count":6,"eval_duration":3}"#,
        )
        .await;
        let provider = provider_for(&base);

        let completion = provider
            .complete(&[Message::user("Is breakfast included?")], &GenerationOptions {
                model: "llama3.2".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(completion.content, "Breakfast is included.");
        assert_eq!(completion.model, "llama3.2");
        assert_eq!(completion.usage.unwrap().total_tokens, 26);

        let raw = request.await.unwrap();
        assert!(raw.starts_with("POST /api/chat"));
        assert!(raw.contains("Is breakfast included?"));
    }

    #[tokio::test]
    async fn test_list_models() {
        let (base, request) = serve_once(
            200,
            r#"{"models":[{"name":"llama3.2:latest","modified_at":"2025-01-01T00:00:00Z","size":2019393189}]}"#,
        )
        .await;
        let provider = provider_for(&base);

        let models = provider.list_models().await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "llama3.2:latest");
        assert!(request.await.unwrap().starts_with("GET /api/tags"));
    }

    #[tokio::test]
    async fn test_error_response_is_unhealthy() {
        let (base, _request) = serve_once(500, "boom").await;
        let provider = provider_for(&base);

        assert!(!provider.health_check().await.unwrap());
    }
}
