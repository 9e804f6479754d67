//! Chat Controller
//!
//! Reactive wrapper around one `ChatSession`. Copyable, so page components
//! and the widget can all hold it.

use concierge_core::{BookingTrigger, ChatSession, Message, PendingTurn, Reply};
use leptos::logging;
use leptos::prelude::*;

use crate::api;

#[derive(Clone, Copy)]
pub struct ChatController {
    session: RwSignal<ChatSession>,
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatController {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
        }
    }

    pub fn is_open(self) -> bool {
        self.session.with(ChatSession::is_open)
    }

    pub fn is_loading(self) -> bool {
        self.session.with(ChatSession::is_loading)
    }

    pub fn unread(self) -> usize {
        self.session.with(ChatSession::unread)
    }

    /// Transcript with display indices (stable keys, the transcript only grows)
    pub fn messages(self) -> Vec<(usize, Message)> {
        self.session
            .with(|s| s.transcript().iter().cloned().enumerate().collect())
    }

    pub fn message_count(self) -> usize {
        self.session.with(|s| s.transcript().len())
    }

    pub fn suggestions(self) -> &'static [(&'static str, &'static str)] {
        self.session.with(ChatSession::suggestions)
    }

    pub fn toggle(self) {
        self.session.update(ChatSession::toggle);
    }

    /// Send guest input. Returns `false` when the send was rejected.
    pub fn send(self, text: &str) -> bool {
        let turn = self.session.try_update(|s| s.begin_send(text)).flatten();
        match turn {
            Some(turn) => {
                self.dispatch(turn);
                true
            }
            None => false,
        }
    }

    /// Open the panel and, if needed, send the canned booking request
    pub fn book_stay(self) {
        if let Some(turn) = self.session.try_update(ChatSession::trigger_booking).flatten() {
            self.dispatch(turn);
        }
    }

    /// Trigger handed to page content
    pub fn booking_trigger(self) -> BookingTrigger {
        BookingTrigger::new(move || self.book_stay())
    }

    fn dispatch(self, turn: PendingTurn) {
        let session = self.session;
        leptos::task::spawn_local(async move {
            let reply = api::send_chat(&turn).await.unwrap_or_else(|e| {
                logging::warn!("Chat request failed: {e}");
                Reply::Fallback
            });
            session.update(|s| {
                s.complete(turn.ticket(), &reply);
            });
        });
    }
}
