//! Shared foundation for the Concierge assistant.
//!
//! Holds the application configuration and the workspace-wide error type.
//! Everything else (rules, fallback model, chat engine, API) builds on this
//! crate.

pub mod config;
pub mod error;

pub use config::{AssistantVariant, ConciergeConfig};
pub use error::{ConciergeError, Result};
