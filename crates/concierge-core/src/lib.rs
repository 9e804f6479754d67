//! # concierge-core
//!
//! Domain logic for the OceanView Boutique Hotel site and its booking assistant.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Concierge                            │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐   │
//! │  │ ChatSession  │  │    Reply     │  │   LlmProvider     │   │
//! │  │ (transcript, │──│ (pending /   │──│   (Strategy)      │   │
//! │  │  in-flight)  │  │  text / fb)  │  │                   │   │
//! │  └──────────────┘  └──────────────┘  └───────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//!        ▲
//!        │ BookingTrigger (injected callback)
//! ┌──────┴───────┐   ┌───────────────┐
//! │ContentRouter │   │ Room catalog  │
//! └──────────────┘   └───────────────┘
//! ```
//!
//! The `LlmProvider` trait keeps the session logic independent of Gemini,
//! Ollama, or the in-process [`provider::MockProvider`] used by tests.

pub mod booking;
pub mod catalog;
pub mod concierge;
pub mod error;
pub mod hotel;
pub mod message;
pub mod page;
pub mod provider;
pub mod reply;
pub mod session;

pub use booking::BookingTrigger;
pub use catalog::{Room, rooms};
pub use concierge::{Concierge, ConciergeBuilder, ConciergeConfig};
pub use error::{ConciergeError, Result};
pub use message::{Message, Role, Transcript};
pub use page::{ContentRouter, Page};
pub use provider::LlmProvider;
pub use reply::Reply;
pub use session::{ChatSession, PendingTurn, PanelState, TurnTicket};
