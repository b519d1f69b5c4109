//! Session-hosting chat service used by the HTTP surface.
//!
//! Owns the engine and a registry of sessions. Submissions are serialized
//! behind one async lock: a submission (including a pending fallback call)
//! completes before the next is accepted.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::engine::{ChatEngine, EngineReply};
use crate::error::ChatError;
use crate::session::{Session, SessionSummary};
use crate::store::ConversationEntry;

/// Maximum message length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Hosts chat sessions over one engine.
pub struct ChatService {
    engine: ChatEngine,
    session_timeout_minutes: u32,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl ChatService {
    /// Create a service with the given engine and session timeout.
    pub fn new(engine: ChatEngine, session_timeout_minutes: u32) -> Self {
        Self {
            engine,
            session_timeout_minutes,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Handle an incoming chat message.
    ///
    /// Empty or whitespace-only messages are rejected before the dispatcher
    /// runs; nothing is appended anywhere. Returns the reply and the
    /// session ID (new or existing).
    pub async fn handle_message(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<(EngineReply, Uuid), ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::MessageTooLong(MAX_MESSAGE_LENGTH));
        }

        let mut sessions = self.sessions.lock().await;
        let sid = self.resolve_session(&mut sessions, session_id);

        let session = sessions
            .get_mut(&sid)
            .ok_or_else(|| ChatError::Internal("session vanished during submit".to_string()))?;

        match session.submit(message, &self.engine).await {
            Some(reply) => Ok((reply, sid)),
            // Unreachable after the trim check above, but the contract of
            // submit is Option and the error path costs nothing.
            None => Err(ChatError::EmptyMessage),
        }
    }

    /// Get the transcript for a session.
    pub async fn history(&self, session_id: Uuid) -> Result<Vec<ConversationEntry>, ChatError> {
        let sessions = self.sessions.lock().await;
        let session = sessions
            .get(&session_id)
            .ok_or(ChatError::SessionNotFound(session_id))?;
        Ok(session.transcript.entries().to_vec())
    }

    /// Empty a session's transcript (the storefront clear action).
    ///
    /// The session itself stays alive; only the store is emptied.
    pub async fn clear(&self, session_id: Uuid) -> Result<(), ChatError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(ChatError::SessionNotFound(session_id))?;
        session.transcript.clear();
        info!(session = %session_id, "Conversation cleared");
        Ok(())
    }

    /// List all live sessions as summaries.
    pub async fn list_sessions(&self) -> Vec<SessionSummary> {
        let sessions = self.sessions.lock().await;
        sessions.values().map(|s| s.summary()).collect()
    }

    // -- Private helpers --

    /// Resolve or create a session ID. Expired sessions are removed and
    /// replaced.
    fn resolve_session(
        &self,
        sessions: &mut HashMap<Uuid, Session>,
        requested: Option<Uuid>,
    ) -> Uuid {
        if let Some(sid) = requested {
            if let Some(session) = sessions.get(&sid) {
                if !session.is_expired(self.session_timeout_minutes) {
                    return sid;
                }
                sessions.remove(&sid);
            }
        }

        let session = Session::new();
        let sid = session.id;
        sessions.insert(sid, session);
        info!(session = %sid, "Session created");
        sid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReplySource;
    use crate::store::Speaker;
    use chrono::Local;

    fn service() -> ChatService {
        ChatService::new(ChatEngine::storefront(), 30)
    }

    // ---- Validation ----

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let svc = service();
        let result = svc.handle_message("", None).await;
        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
        assert!(svc.list_sessions().await.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_message_rejected_without_session() {
        let svc = service();
        let result = svc.handle_message("   \t  ", None).await;
        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
        // No session was created, so nothing was appended anywhere.
        assert!(svc.list_sessions().await.is_empty());
    }

    #[tokio::test]
    async fn test_message_too_long_rejected() {
        let svc = service();
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        let result = svc.handle_message(&long, None).await;
        assert!(matches!(result.unwrap_err(), ChatError::MessageTooLong(_)));
    }

    #[tokio::test]
    async fn test_message_at_max_length_ok() {
        let svc = service();
        let msg = "a".repeat(MAX_MESSAGE_LENGTH);
        assert!(svc.handle_message(&msg, None).await.is_ok());
    }

    // ---- Basic handling ----

    #[tokio::test]
    async fn test_handle_message_creates_session() {
        let svc = service();
        let (reply, sid) = svc.handle_message("hi", None).await.unwrap();
        assert_eq!(reply.source, ReplySource::Rule);
        assert_ne!(sid, Uuid::nil());
        assert_eq!(svc.list_sessions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_same_session_id_reuses_session() {
        let svc = service();
        let (_, sid1) = svc.handle_message("hi", None).await.unwrap();
        let (_, sid2) = svc.handle_message("cancel", Some(sid1)).await.unwrap();
        assert_eq!(sid1, sid2);
        assert_eq!(svc.list_sessions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_id_creates_new() {
        let svc = service();
        let fake = Uuid::new_v4();
        let (_, sid) = svc.handle_message("hello", Some(fake)).await.unwrap();
        assert_ne!(sid, fake);
    }

    #[tokio::test]
    async fn test_expired_session_replaced() {
        let svc = service();
        let (_, sid1) = svc.handle_message("hi", None).await.unwrap();
        {
            let mut sessions = svc.sessions.lock().await;
            if let Some(s) = sessions.get_mut(&sid1) {
                s.last_message_at = Local::now().timestamp() - 60 * 60;
            }
        }
        let (_, sid2) = svc.handle_message("hello", Some(sid1)).await.unwrap();
        assert_ne!(sid1, sid2);
    }

    // ---- History ----

    #[tokio::test]
    async fn test_history_pairs_in_order() {
        let svc = service();
        let (_, sid) = svc.handle_message("hi", None).await.unwrap();
        svc.handle_message("cancel my order", Some(sid)).await.unwrap();

        let history = svc.history(sid).await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].speaker, Speaker::User);
        assert_eq!(history[0].text, "hi");
        assert_eq!(history[1].speaker, Speaker::Bot);
        assert_eq!(history[2].text, "cancel my order");
    }

    #[tokio::test]
    async fn test_history_unknown_session() {
        let svc = service();
        let result = svc.history(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), ChatError::SessionNotFound(_)));
    }

    // ---- Clear ----

    #[tokio::test]
    async fn test_clear_empties_transcript_keeps_session() {
        let svc = service();
        let (_, sid) = svc.handle_message("hi", None).await.unwrap();
        svc.clear(sid).await.unwrap();

        let history = svc.history(sid).await.unwrap();
        assert!(history.is_empty());
        assert_eq!(svc.list_sessions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_unknown_session() {
        let svc = service();
        let result = svc.clear(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), ChatError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_conversation_continues_after_clear() {
        let svc = service();
        let (_, sid) = svc.handle_message("hi", None).await.unwrap();
        svc.clear(sid).await.unwrap();
        let (_, sid2) = svc.handle_message("hello again", Some(sid)).await.unwrap();
        assert_eq!(sid, sid2);
        assert_eq!(svc.history(sid).await.unwrap().len(), 2);
    }

    // ---- Sessions listing ----

    #[tokio::test]
    async fn test_list_sessions_multiple() {
        let svc = service();
        svc.handle_message("hi", None).await.unwrap();
        svc.handle_message("hello", None).await.unwrap();
        assert_eq!(svc.list_sessions().await.len(), 2);
    }

    // ---- Concurrency: submissions are serialized, all complete ----

    #[tokio::test]
    async fn test_concurrent_submissions() {
        use std::sync::Arc;

        let svc = Arc::new(service());
        let mut handles = Vec::new();
        for i in 0..10 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.handle_message(&format!("hello {}", i), None).await.unwrap()
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(svc.list_sessions().await.len(), 10);
    }
}
