//! Chat Session
//!
//! State owned by one chat widget: panel visibility, the transcript, and the
//! single in-flight request slot.
//!
//! A send is split in two halves so the host decides how to wait:
//!
//! ```text
//! begin_send(input) ──▶ PendingTurn { ticket, history, input }
//!                              │
//!                     provider call (async)
//!                              │
//! complete(ticket, Reply) ◀────┘
//! ```
//!
//! Closing the panel does not cancel anything; a reply that lands while the
//! panel is closed is appended and counted as unread.

use serde::{Deserialize, Serialize};

use crate::hotel::{BOOKING_INTENT_MESSAGE, BOOKING_INTENT_PHRASE, GREETING, SUGGESTED_PROMPTS};
use crate::message::{Message, Transcript};
use crate::reply::Reply;

/// Chat panel visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Identifies the request a reply belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTicket(u64);

impl std::fmt::Display for TurnTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn-{}", self.0)
    }
}

/// Everything needed to issue the completion call for one send
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTurn {
    ticket: TurnTicket,
    history: Vec<Message>,
    input: String,
}

impl PendingTurn {
    pub const fn ticket(&self) -> TurnTicket {
        self.ticket
    }

    /// Transcript as it was before the user entry was appended
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

/// One chat widget's state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    panel: PanelState,
    transcript: Transcript,
    in_flight: Option<TurnTicket>,
    next_ticket: u64,
    unread: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Closed panel with the greeting as the only message
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            panel: PanelState::Closed,
            transcript: Transcript::with_greeting(greeting),
            in_flight: None,
            next_ticket: 0,
            unread: 0,
        }
    }

    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// A request is in flight; sends are disabled
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Replies that arrived while the panel was closed
    pub const fn unread(&self) -> usize {
        self.unread
    }

    pub fn open(&mut self) {
        self.panel = PanelState::Open;
        self.unread = 0;
    }

    pub fn toggle(&mut self) {
        match self.panel {
            PanelState::Closed => self.open(),
            PanelState::Open => self.panel = PanelState::Closed,
        }
    }

    /// Quick-reply prompts as `(label, message)`, offered only at the start
    /// of a conversation and while idle.
    pub fn suggestions(&self) -> &'static [(&'static str, &'static str)] {
        if self.transcript.len() < 3 && !self.is_loading() {
            &SUGGESTED_PROMPTS
        } else {
            &[]
        }
    }

    /// Start a send.
    ///
    /// Returns `None` (and leaves the session untouched) when `input` is blank
    /// or another request is still in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingTurn> {
        if input.trim().is_empty() {
            return None;
        }
        if let Some(ticket) = self.in_flight {
            tracing::debug!(%ticket, "Send rejected, request in flight");
            return None;
        }

        let history = self.transcript.messages().to_vec();
        self.transcript.push(Message::user(input));

        let ticket = TurnTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        Some(PendingTurn {
            ticket,
            history,
            input: input.to_string(),
        })
    }

    /// Finish the in-flight send with `reply`.
    ///
    /// Returns `false` for a pending reply or a ticket that is not the one in
    /// flight; nothing changes in that case.
    pub fn complete(&mut self, ticket: TurnTicket, reply: &Reply) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(%ticket, "Ignoring reply for stale turn");
            return false;
        }
        let Some(text) = reply.text() else {
            return false;
        };

        self.transcript.push(Message::assistant(text));
        self.in_flight = None;
        if !self.is_open() {
            self.unread += 1;
        }
        true
    }

    /// Whether a booking request is already in the transcript
    pub fn has_booking_request(&self) -> bool {
        self.transcript.any_contains(BOOKING_INTENT_PHRASE)
    }

    /// Handle the "Book Stay" signal: open the panel and, unless the guest
    /// already asked to book, send the canned booking message.
    pub fn trigger_booking(&mut self) -> Option<PendingTurn> {
        self.open();
        if self.has_booking_request() {
            return None;
        }
        self.begin_send(BOOKING_INTENT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::FALLBACK_REPLY;
    use crate::message::Role;

    fn reply(text: &str) -> Reply {
        Reply::Text(text.into())
    }

    #[test]
    fn test_new_session() {
        let session = ChatSession::new();
        assert_eq!(session.panel(), PanelState::Closed);
        assert!(!session.is_loading());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().messages()[0].role, Role::Assistant);
        assert_eq!(session.transcript().messages()[0].text, GREETING);
    }

    #[test]
    fn test_toggle() {
        let mut session = ChatSession::new();
        session.toggle();
        assert!(session.is_open());
        session.toggle();
        assert!(!session.is_open());
    }

    #[test]
    fn test_send_appends_pair() {
        let mut session = ChatSession::new();
        let turn = session.begin_send("What time is check-in?").unwrap();

        assert!(session.is_loading());
        assert_eq!(turn.input(), "What time is check-in?");
        assert_eq!(turn.history().len(), 1);
        assert_eq!(session.transcript().len(), 2);

        assert!(session.complete(turn.ticket(), &reply("Check-in is at 2:00 PM.")));
        assert!(!session.is_loading());

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "What time is check-in?");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].text, "Check-in is at 2:00 PM.");
    }

    #[test]
    fn test_length_after_n_sends() {
        let mut session = ChatSession::new();
        for n in 1..=5 {
            let turn = session.begin_send(&format!("question {n}")).unwrap();
            session.complete(turn.ticket(), &reply("answer"));
            assert_eq!(session.transcript().len(), 2 * n + 1);
        }
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut session = ChatSession::new();
        for input in ["", "   ", "\n\t "] {
            assert!(session.begin_send(input).is_none());
        }
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_literal_text_kept() {
        let mut session = ChatSession::new();
        session.begin_send("  hello  ").unwrap();
        assert_eq!(session.transcript().last().unwrap().text, "  hello  ");
    }

    #[test]
    fn test_send_while_in_flight_rejected() {
        let mut session = ChatSession::new();
        let turn = session.begin_send("first").unwrap();

        assert!(session.begin_send("second").is_none());
        assert!(session.trigger_booking().is_none());
        assert_eq!(session.transcript().len(), 2);

        session.complete(turn.ticket(), &reply("ok"));
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_pending_and_stale_replies_ignored() {
        let mut session = ChatSession::new();
        let first = session.begin_send("first").unwrap();

        assert!(!session.complete(first.ticket(), &Reply::Pending));
        assert!(session.is_loading());

        assert!(session.complete(first.ticket(), &reply("one")));
        assert!(!session.complete(first.ticket(), &reply("again")));
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_failure_appends_fallback() {
        let mut session = ChatSession::new();
        let turn = session.begin_send("What time is check-in?").unwrap();
        session.complete(turn.ticket(), &Reply::Fallback);

        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, FALLBACK_REPLY);
        assert!(last.text.contains("+94 11 123 4567"));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_booking_trigger_is_idempotent() {
        let mut session = ChatSession::new();

        let turn = session.trigger_booking().unwrap();
        assert!(session.is_open());
        assert_eq!(turn.input(), BOOKING_INTENT_MESSAGE);
        session.complete(turn.ticket(), &reply("Lovely! May I have your name?"));
        assert_eq!(session.transcript().len(), 3);

        session.toggle();
        assert!(session.trigger_booking().is_none());
        assert!(session.is_open());
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_booking_skipped_when_guest_already_asked() {
        let mut session = ChatSession::new();
        let turn = session.begin_send("Can I Book A Stay for two?").unwrap();
        session.complete(turn.ticket(), &reply("Of course."));

        assert!(session.trigger_booking().is_none());
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_any_message_with_phrase_blocks_booking() {
        let mut session = ChatSession::with_greeting("You can book a stay with me anytime.");
        assert!(session.trigger_booking().is_none());
        assert!(session.is_open());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_reply_lands_while_closed() {
        let mut session = ChatSession::new();
        session.open();
        let turn = session.begin_send("hello").unwrap();
        session.toggle();

        assert!(session.complete(turn.ticket(), &reply("hi")));
        assert_eq!(session.unread(), 1);
        assert_eq!(session.transcript().len(), 3);

        session.open();
        assert_eq!(session.unread(), 0);
    }

    #[test]
    fn test_suggestions_only_at_start() {
        let mut session = ChatSession::new();
        assert_eq!(session.suggestions().len(), 2);

        let turn = session.begin_send("hi").unwrap();
        assert!(session.suggestions().is_empty());

        session.complete(turn.ticket(), &reply("hello"));
        assert!(session.suggestions().is_empty());
    }
}
