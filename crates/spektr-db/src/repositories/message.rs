//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spektr_core::entities::{Message, MessageDraft, Reaction};
use spektr_core::traits::{MessageRepository, RepoResult};

use crate::models::{MessageModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn list_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>> {
        // Chronological display order; id breaks same-timestamp ties
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, content, type AS kind, media_url,
                   is_edited, created_at, updated_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn reactions_for_chat(&self, chat_id: i64) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT r.id, r.message_id, r.user_id, r.emoji
            FROM reactions r
            JOIN messages m ON m.id = r.message_id
            WHERE m.chat_id = $1
            ORDER BY r.id ASC
            ",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &MessageDraft) -> RepoResult<Message> {
        // The store assigns id and both timestamps; the full row goes back
        // to the caller so it can reconcile optimistic local state.
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (chat_id, sender_id, content, type, media_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, chat_id, sender_id, content, type AS kind, media_url,
                      is_edited, created_at, updated_at
            ",
        )
        .bind(draft.chat_id)
        .bind(draft.sender_id)
        .bind(&draft.content)
        .bind(draft.kind.as_str())
        .bind(draft.media_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(result))
    }
}
