//! Response DTOs for the action dispatcher
//!
//! All response DTOs implement `Serialize` with camelCase wire keys.
//! The stored credential digest never appears in any response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use spektr_core::entities::MessageKind;

// ============================================================================
// Auth Responses
// ============================================================================

/// Envelope for `register` and `login`
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(user: UserResponse) -> Self {
        Self { success: true, user }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user record (password digest excluded)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub is_admin: bool,
}

/// Reduced user record returned by `search_users`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
}

// ============================================================================
// Chat Responses
// ============================================================================

/// Chat record with per-user flags and aggregates, as listed by `get_chats`
///
/// The participant flags are null when the requesting user has no
/// participant row (official chats visible without membership).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub is_official: bool,
    pub created_at: DateTime<Utc>,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
    pub is_blocked: Option<bool>,
    pub last_message: Option<String>,
    pub unread_count: i64,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Full message record, as listed by `get_messages` and returned by
/// `send_message`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub media_url: Option<String>,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Ordered reaction pairs; omitted entirely when the message has none
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<ReactionResponse>,
}

/// A single `{userId, emoji}` reaction pair
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub user_id: i64,
    pub emoji: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
