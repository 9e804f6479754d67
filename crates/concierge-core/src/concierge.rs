//! Concierge
//!
//! Turns one chat turn into exactly one provider call: system instruction,
//! prior transcript, new input. Any failure becomes [`Reply::Fallback`];
//! there is no retry.

use std::sync::Arc;

use crate::error::{ConciergeError, Result};
use crate::hotel::SYSTEM_INSTRUCTION;
use crate::message::{Conversation, Message};
use crate::provider::{Completion, GenerationOptions, LlmProvider};
use crate::reply::Reply;
use crate::session::{ChatSession, PendingTurn};

/// Concierge configuration
#[derive(Clone, Debug)]
pub struct ConciergeConfig {
    /// Persona and policy sent with every call
    pub system_prompt: String,

    /// Generation options
    pub generation: GenerationOptions,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            system_prompt: SYSTEM_INSTRUCTION.into(),
            generation: GenerationOptions::default(),
        }
    }
}

/// The booking assistant
pub struct Concierge {
    provider: Arc<dyn LlmProvider>,
    config: ConciergeConfig,
}

impl Concierge {
    pub fn new(provider: Arc<dyn LlmProvider>, config: ConciergeConfig) -> Self {
        Self { provider, config }
    }

    /// Default persona, using the provider's default model
    pub fn with_defaults(provider: Arc<dyn LlmProvider>) -> Self {
        let mut config = ConciergeConfig::default();
        config.generation.model = provider.default_model().to_string();
        Self::new(provider, config)
    }

    /// Assemble the prompt for one turn: the full prior transcript is sent
    pub fn build_prompt(&self, history: &[Message], input: &str) -> Conversation {
        let mut conversation = Conversation::with_system_prompt(&self.config.system_prompt);
        conversation.extend_history(history);
        conversation.push(Message::user(input));
        conversation
    }

    /// One provider call; errors are returned, not mapped
    pub async fn complete(&self, history: &[Message], input: &str) -> Result<Completion> {
        let prompt = self.build_prompt(history, input);
        tracing::debug!(
            provider = self.provider.name(),
            model = %self.config.generation.model,
            messages = prompt.len(),
            "Requesting completion"
        );

        let completion = self
            .provider
            .complete(prompt.messages(), &self.config.generation)
            .await?;

        if completion.content.trim().is_empty() {
            return Err(ConciergeError::EmptyReply);
        }
        Ok(completion)
    }

    /// One provider call collapsed to a reply
    pub async fn reply(&self, history: &[Message], input: &str) -> Reply {
        Reply::from_completion(self.complete(history, input).await)
    }

    /// Reply for a turn started with [`ChatSession::begin_send`]
    pub async fn respond(&self, turn: &PendingTurn) -> Reply {
        self.reply(turn.history(), turn.input()).await
    }

    /// Run a full send against `session`. Returns `false` when the send was
    /// rejected (blank input or a request already in flight).
    pub async fn converse(&self, session: &mut ChatSession, input: &str) -> bool {
        let Some(turn) = session.begin_send(input) else {
            return false;
        };
        let reply = self.respond(&turn).await;
        session.complete(turn.ticket(), &reply)
    }

    /// Run the "Book Stay" trigger against `session`. Returns `false` when no
    /// booking message was sent.
    pub async fn book_stay(&self, session: &mut ChatSession) -> bool {
        let Some(turn) = session.trigger_booking() else {
            return false;
        };
        let reply = self.respond(&turn).await;
        session.complete(turn.ticket(), &reply)
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.config.generation.model
    }

    /// Get configuration
    pub const fn config(&self) -> &ConciergeConfig {
        &self.config
    }
}

/// Builder for Concierge configuration
#[derive(Default)]
pub struct ConciergeBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    model: Option<String>,
    config: ConciergeConfig,
}

impl ConciergeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub const fn temperature(mut self, temp: f32) -> Self {
        self.config.generation.temperature = temp;
        self
    }

    pub fn build(self) -> Result<Concierge> {
        let provider = self
            .provider
            .ok_or_else(|| ConciergeError::Config("Provider is required".into()))?;

        let mut config = self.config;
        config.generation.model = self
            .model
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Concierge::new(provider, config))
    }
}
