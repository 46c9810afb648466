//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spektr_core::entities::ChatOverview;
use spektr_core::traits::{ChatRepository, RepoResult};

use crate::models::ChatOverviewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<ChatOverview>> {
        // Official chats are visible without a participant row, so the join
        // is LEFT and their flags come back NULL. unread_count is the total
        // message count: there is no read-marker entity to subtract against.
        // COALESCE in ORDER BY makes those NULL flags sort as unpinned.
        let results = sqlx::query_as::<_, ChatOverviewModel>(
            r"
            SELECT c.id, c.type AS kind, c.name, c.is_official, c.created_at,
                   cp.is_pinned, cp.is_archived, cp.is_blocked,
                   (SELECT m.content FROM messages m
                    WHERE m.chat_id = c.id
                    ORDER BY m.created_at DESC, m.id DESC
                    LIMIT 1) AS last_message,
                   (SELECT COUNT(*) FROM messages m
                    WHERE m.chat_id = c.id) AS unread_count
            FROM chats c
            LEFT JOIN chat_participants cp ON cp.chat_id = c.id AND cp.user_id = $1
            WHERE cp.user_id = $1 OR c.is_official = TRUE
            ORDER BY COALESCE(cp.is_pinned, FALSE) DESC, c.created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChatOverview::from).collect())
    }
}
