//! Route handler functions for all API endpoints.
//!
//! Each handler extracts parameters via axum extractors, calls the chat
//! service, and returns JSON responses.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use concierge_chat::{ConversationEntry, ReplySource, SessionSummary};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponseBody {
    pub reply: String,
    pub session_id: Uuid,
    pub source: ReplySource,
    /// Name of the matching rule when `source` is `rule`.
    pub rule: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub variant: String,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<ConversationEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearedResponse {
    pub cleared: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let variant = state
        .config
        .lock()
        .map(|c| c.assistant.variant.to_string())
        .map_err(|e| ApiError::Internal(format!("config lock poisoned: {}", e)))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        variant,
        uptime_secs: state.start_time.elapsed().as_secs(),
    }))
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let (reply, session_id) = state.chat.handle_message(&req.message, req.session_id).await?;

    Ok(Json(ChatResponseBody {
        reply: reply.text,
        session_id,
        source: reply.source,
        rule: reply.rule,
    }))
}

/// GET /sessions
pub async fn sessions(State(state): State<AppState>) -> Json<SessionsResponse> {
    Json(SessionsResponse {
        sessions: state.chat.list_sessions().await,
    })
}

/// GET /sessions/{id}/history
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let entries = state.chat.history(id).await?;
    Ok(Json(HistoryResponse { entries }))
}

/// DELETE /sessions/{id}
pub async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClearedResponse>, ApiError> {
    state.chat.clear(id).await?;
    Ok(Json(ClearedResponse { cleared: true }))
}
