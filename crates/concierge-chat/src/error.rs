//! Error types for the chat engine.

use concierge_core::error::ConciergeError;

/// Errors from the chat service.
///
/// Note what is absent: a rule miss is not an error (it routes to the
/// fallback), and a remote completion failure never appears here either;
/// the engine converts it to the fixed apology before it can escape.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ConciergeError> for ChatError {
    fn from(err: ConciergeError) -> Self {
        ChatError::Internal(err.to_string())
    }
}
