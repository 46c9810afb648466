//! Chat database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Aggregated chat-list row: one chat joined with the viewer's participant
/// flags plus the last-message and message-count subquery columns.
///
/// The `type` column is selected with an `AS kind` alias.
#[derive(Debug, Clone, FromRow)]
pub struct ChatOverviewModel {
    pub id: i64,
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
