//! Conversational engine for the Concierge assistant.
//!
//! Wires the rule table and the model fallback into a dispatcher, owns the
//! per-session conversation store, and hosts sessions behind a small
//! service used by the HTTP surface.

pub mod engine;
pub mod error;
pub mod service;
pub mod session;
pub mod store;

pub use engine::{ChatEngine, EngineReply, FallbackBehavior, ReplySource};
pub use error::ChatError;
pub use service::{ChatService, MAX_MESSAGE_LENGTH};
pub use session::{Session, SessionState, SessionSummary};
pub use store::{ConversationEntry, Speaker, Transcript};
