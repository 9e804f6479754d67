//! Mock Provider
//!
//! For tests and offline demos. Replays scripted outcomes in order, then
//! falls back to a canned answer, and records every request it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Completion, FinishReason, GenerationOptions, LlmProvider, ModelInfo};
use crate::error::{ConciergeError, Result};
use crate::message::Message;

const MOCK_MODEL: &str = "mock-receptionist";

/// Scripted step
#[derive(Clone, Debug)]
enum Step {
    Reply(String),
    Fail(String),
}

/// Mock provider with scripted replies
pub struct MockProvider {
    script: Mutex<VecDeque<Step>>,
    default_reply: String,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self::with_default_reply(
            "Thank you for your message. Our front desk is happy to help with rooms, dining, and bookings.",
        )
    }

    /// Answer every request with `reply` once the script is exhausted
    pub fn with_default_reply(reply: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default_reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose every call fails
    pub fn failing() -> Self {
        Self::with_default_reply("")
    }

    /// Queue a successful reply
    pub fn push_reply(&self, text: impl Into<String>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Step::Reply(text.into()));
        }
    }

    /// Queue a failed call
    pub fn push_failure(&self, error: impl Into<String>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(Step::Fail(error.into()));
        }
    }

    /// Messages sent on each call so far
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn next_step(&self) -> Step {
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| {
                if self.default_reply.is_empty() {
                    Step::Fail("mock provider offline".into())
                } else {
                    Step::Reply(self.default_reply.clone())
                }
            })
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    fn default_model(&self) -> &str {
        MOCK_MODEL
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true) // Mock always healthy
    }

    async fn complete(
        &self,
        messages: &[Message],
        _options: &GenerationOptions,
    ) -> Result<Completion> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(messages.to_vec());
        }

        match self.next_step() {
            Step::Reply(content) => Ok(Completion {
                content,
                model: MOCK_MODEL.into(),
                usage: None,
                finish_reason: Some(FinishReason::Stop),
            }),
            Step::Fail(error) => Err(ConciergeError::ProviderUnavailable(error)),
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        Ok(vec![ModelInfo {
            id: MOCK_MODEL.into(),
            name: "Mock Receptionist".into(),
            context_length: None,
        }])
    }
}
