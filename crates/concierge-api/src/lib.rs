//! HTTP surface for the Concierge assistant.
//!
//! A small axum API: submit a message, read a session's transcript, clear
//! a conversation, list sessions, health. The chat engine itself lives in
//! `concierge-chat`; this crate only maps HTTP to it.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
