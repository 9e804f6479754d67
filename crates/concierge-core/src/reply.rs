//! Reply State
//!
//! Outcome of one completion call. A turn starts `Pending` and resolves to
//! either the provider's text or the fixed fallback.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hotel::FALLBACK_REPLY;
use crate::provider::Completion;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum Reply {
    /// Request issued, nothing back yet
    #[default]
    Pending,
    /// Provider answered with usable text
    Text(String),
    /// Call failed or returned nothing usable
    Fallback,
}

impl Reply {
    /// Wrap provider text; blank text counts as a failure.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::Fallback
        } else {
            Self::Text(text)
        }
    }

    /// Collapse a provider result into a reply, logging the failure.
    pub fn from_completion(result: Result<Completion>) -> Self {
        match result {
            Ok(completion) => {
                let reply = Self::from_text(completion.content);
                if reply.is_fallback() {
                    tracing::warn!(model = %completion.model, "Provider returned no text");
                }
                reply
            }
            Err(e) => {
                tracing::warn!(error = %e, retryable = e.is_retryable(), "Completion failed");
                Self::Fallback
            }
        }
    }

    /// Text to append to the transcript; `None` while pending.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Text(text) => Some(text),
            Self::Fallback => Some(FALLBACK_REPLY),
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConciergeError;

    fn completion(content: &str) -> Completion {
        Completion {
            content: content.into(),
            model: "test".into(),
            usage: None,
            finish_reason: None,
        }
    }

    #[test]
    fn test_blank_text_is_fallback() {
        assert_eq!(Reply::from_text("  \n"), Reply::Fallback);
        assert_eq!(Reply::from_text("Hi"), Reply::Text("Hi".into()));
    }

    #[test]
    fn test_fallback_text_is_verbatim() {
        assert_eq!(Reply::Fallback.text(), Some(FALLBACK_REPLY));
        assert_eq!(Reply::Pending.text(), None);
    }

    #[test]
    fn test_from_completion() {
        assert_eq!(
            Reply::from_completion(Ok(completion("Check-in is at 2:00 PM."))),
            Reply::Text("Check-in is at 2:00 PM.".into())
        );
        assert!(Reply::from_completion(Ok(completion(""))).is_fallback());
        assert!(Reply::from_completion(Err(ConciergeError::Provider("boom".into()))).is_fallback());
    }
}
