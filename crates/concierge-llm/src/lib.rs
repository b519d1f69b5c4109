//! Hosted-model fallback for the Concierge assistant.
//!
//! - `OpenAiCompletion` sends one bounded chat-completion request per call
//!   to an OpenAI-compatible endpoint. This is the production backend for
//!   the property assistant's fallback path.
//! - `MockCompletion` provides deterministic replies and forced failures
//!   for testing.
//! - `PROPERTY_CONTEXT` is the fixed system prompt describing the property.

pub mod openai;
pub mod prompt;
pub mod service;

pub use openai::OpenAiCompletion;
pub use prompt::PROPERTY_CONTEXT;
pub use service::{CompletionService, DynCompletionService, MockCompletion};
