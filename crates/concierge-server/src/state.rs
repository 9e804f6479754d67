//! Application State

use std::sync::Arc;

use concierge_core::Concierge;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Booking assistant (provider + persona + sampling options)
    pub concierge: Arc<Concierge>,
}

impl AppState {
    pub fn new(concierge: Concierge) -> Self {
        Self {
            concierge: Arc::new(concierge),
        }
    }
}
