//! Application state shared across all route handlers.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use concierge_chat::ChatService;
use concierge_core::config::ConciergeConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Mutex<ConciergeConfig>>,
    /// The session-hosting chat service.
    pub chat: Arc<ChatService>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: ConciergeConfig, chat: ChatService) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            chat: Arc::new(chat),
            start_time: Instant::now(),
        }
    }
}
