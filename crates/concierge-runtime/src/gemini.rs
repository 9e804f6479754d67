//! Gemini LLM Provider
//!
//! Implementation of `LlmProvider` over the Generative Language REST API
//! (`models/{model}:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use concierge_core::{
    error::{ConciergeError, Result},
    message::{Message, Role},
    provider::{
        Completion, FinishReason, GenerationOptions, LlmProvider, ModelInfo, TokenUsage,
        DEFAULT_MODEL,
    },
};
use serde::{Deserialize, Serialize};

use crate::http::{status_error, transport_error};

const PROVIDER: &str = "Gemini";

/// Gemini provider configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key; calls fail with an auth error when absent
    pub api_key: Option<String>,

    /// API base URL
    pub base_url: String,

    /// Default model
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".into(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: 60,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (`GEMINI_API_KEY`, then `API_KEY`)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.trim().is_empty());

        Self {
            api_key,
            base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            model: lookup("GEMINI_MODEL").unwrap_or(defaults.model),
            timeout_secs: lookup("GEMINI_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Part {
    #[serde(default)]
    text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    thought: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    display_name: Option<String>,
    input_token_limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

/// Gemini LLM provider
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create from configuration
    pub fn from_config(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(GeminiConfig::from_env())
    }

    pub const fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ConciergeError::Auth("GEMINI_API_KEY not set".into()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1beta/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Convert concierge messages to Gemini contents; the system message
    /// becomes `systemInstruction`.
    fn build_request(messages: &[Message], opts: &GenerationOptions) -> GenerateContentRequest {
        let mut system_instruction = None;
        let mut contents = Vec::with_capacity(messages.len());

        for m in messages {
            let part = Part {
                text: m.text.clone(),
                thought: false,
            };
            let role = match m.role {
                Role::System => {
                    system_instruction = Some(Content {
                        role: None,
                        parts: vec![part],
                    });
                    continue;
                }
                Role::User => "user",
                Role::Assistant => "model",
            };
            contents.push(Content {
                role: Some(role.into()),
                parts: vec![part],
            });
        }

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: GenerationConfig {
                temperature: opts.temperature,
                top_p: opts.top_p,
                max_output_tokens: opts.max_tokens,
            },
        }
    }

    /// Convert Gemini response to a completion (first candidate, text parts
    /// joined, thought parts skipped)
    fn convert_completion(response: GenerateContentResponse, model: &str) -> Completion {
        let candidate = response.candidates.into_iter().next();
        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(|reason| match reason {
                "STOP" => FinishReason::Stop,
                "MAX_TOKENS" => FinishReason::Length,
                "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => {
                    FinishReason::ContentFilter
                }
                _ => FinishReason::Error,
            });

        let content = candidate
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter(|p| !p.thought)
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Completion {
            content,
            model: response.model_version.unwrap_or_else(|| model.to_string()),
            usage: response.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            finish_reason,
        }
    }

    async fn error_from(response: reqwest::Response) -> ConciergeError {
        let status = response.status();
        let detail = response
            .json::<ErrorEnvelope>()
            .await
            .map(|e| e.error.message)
            .unwrap_or_default();
        status_error(PROVIDER, status, &detail)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn health_check(&self) -> Result<bool> {
        if !self.has_api_key() {
            tracing::warn!("Gemini health check skipped: no API key");
            return Ok(false);
        }
        match self.list_models().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Gemini health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let api_key = self.api_key()?;
        let model = if options.model.is_empty() {
            self.config.model.as_str()
        } else {
            options.model.as_str()
        };
        let request = Self::build_request(messages, options);

        let response = self
            .client
            .post(self.url(&format!("models/{model}:generateContent")))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, &e))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| transport_error(PROVIDER, &e))?;

        Ok(Self::convert_completion(body, model))
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let api_key = self.api_key()?;
        let response = self
            .client
            .get(self.url("models"))
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, &e))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let list: ModelList = response
            .json()
            .await
            .map_err(|e| transport_error(PROVIDER, &e))?;

        Ok(list
            .models
            .into_iter()
            .map(|m| {
                let id = m.name.trim_start_matches("models/").to_string();
                ModelInfo {
                    name: m.display_name.unwrap_or_else(|| id.clone()),
                    id,
                    context_length: m.input_token_limit,
                }
            })
            .collect())
    }
}
