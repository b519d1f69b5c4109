//! Per-session state and the submit path.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{ChatEngine, EngineReply};
use crate::store::{Speaker, Transcript};

/// Submission state of a session.
///
/// Two states only: a session is either waiting for input or working on
/// one submission. Submissions are serialized, so Processing can never be
/// entered twice concurrently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Processing,
}

/// One conversation: identity, timestamps, state, and the transcript.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    /// Epoch seconds when the session was created.
    pub started_at: i64,
    /// Epoch seconds of the most recent submission.
    pub last_message_at: i64,
    pub state: SessionState,
    pub transcript: Transcript,
    /// Number of user submissions handled.
    pub message_count: u32,
}

impl Session {
    /// Create a fresh session with an empty transcript.
    pub fn new() -> Self {
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            last_message_at: now,
            state: SessionState::Idle,
            transcript: Transcript::new(),
            message_count: 0,
        }
    }

    /// Handle one user submission.
    ///
    /// Empty or whitespace-only text is a no-op: nothing is appended, the
    /// dispatcher is never consulted, and `None` is returned. Otherwise the
    /// session transitions Idle -> Processing, the engine computes the
    /// reply, `(User, text)` then `(Bot, reply)` are appended, and the
    /// session returns to Idle. This is the only mutation path for the
    /// transcript besides the explicit clear.
    pub async fn submit(&mut self, text: &str, engine: &ChatEngine) -> Option<EngineReply> {
        if text.trim().is_empty() {
            return None;
        }

        self.state = SessionState::Processing;
        let reply = engine.respond(text).await;

        self.transcript.append(Speaker::User, text);
        self.transcript.append(Speaker::Bot, reply.text.clone());
        self.last_message_at = Local::now().timestamp();
        self.message_count += 1;
        self.state = SessionState::Idle;

        Some(reply)
    }

    /// Whether the session has been idle longer than the given timeout.
    pub fn is_expired(&self, timeout_minutes: u32) -> bool {
        let now = Local::now().timestamp();
        let timeout_secs = i64::from(timeout_minutes) * 60;
        now - self.last_message_at > timeout_secs
    }

    /// Summarize for listings.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            started_at: format_epoch(self.started_at),
            last_message_at: format_epoch(self.last_message_at),
            message_count: self.message_count,
        }
    }
}

/// Listing view of a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: String,
    pub last_message_at: String,
    pub message_count: u32,
}

/// Format epoch seconds as ISO 8601 string.
fn format_epoch(epoch: i64) -> String {
    chrono::Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.to_rfc3339())
        .unwrap_or_else(|| epoch.to_string())
}
