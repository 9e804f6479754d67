//! Booking Trigger
//!
//! Handle that lets page content ask the chat widget to start a booking.
//! The widget's owner builds it and hands clones to whatever renders a
//! "Book" button.

use std::sync::Arc;

#[derive(Clone)]
pub struct BookingTrigger {
    action: Arc<dyn Fn() + Send + Sync>,
}

impl BookingTrigger {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
        }
    }

    /// Trigger that does nothing, for content rendered without a widget
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn fire(&self) {
        (self.action)();
    }
}

impl Default for BookingTrigger {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for BookingTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingTrigger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::session::ChatSession;

    #[test]
    fn test_clones_share_action() {
        let session = Arc::new(Mutex::new(ChatSession::new()));
        let target = session.clone();
        let trigger = BookingTrigger::new(move || {
            let mut session = target.lock().unwrap();
            let _ = session.trigger_booking();
        });

        let from_nav = trigger.clone();
        let from_room_card = trigger;
        from_nav.fire();
        from_room_card.fire();

        let session = session.lock().unwrap();
        assert!(session.is_open());
        // second fire is rejected while the first booking turn is in flight
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_noop() {
        BookingTrigger::noop().fire();
    }
}
