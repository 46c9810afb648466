//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spektr_core::entities::{NewUser, User, UserPatch, UserSummary};
use spektr_core::error::DomainError;
use spektr_core::traits::{RepoResult, UserRepository};

use crate::models::{UserCredentialsModel, UserModel, UserSummaryModel};

use super::error::{escape_like, map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, password_hash))]
    async fn create_with_saved_chat(
        &self,
        new_user: &NewUser,
        password_hash: &str,
        saved_chat_name: &str,
    ) -> RepoResult<User> {
        // One transaction: the user and their saved chat exist atomically.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let user = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, username, display_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, display_name, avatar, bio, is_verified, is_admin
            ",
        )
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.display_name)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IdentityTaken))?;

        let chat_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO chats (type, name)
            VALUES ('saved', $1)
            RETURNING id
            ",
        )
        .bind(saved_chat_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO chat_participants (chat_id, user_id, is_pinned)
            VALUES ($1, $2, TRUE)
            ",
        )
        .bind(chat_id)
        .bind(user.id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(User::from(user))
    }

    #[instrument(skip(self))]
    async fn find_for_login(&self, username: &str) -> RepoResult<Option<(User, String)>> {
        let result = sqlx::query_as::<_, UserCredentialsModel>(
            r"
            SELECT id, email, username, display_name, avatar, bio, is_verified, is_admin,
                   password_hash
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserCredentialsModel::into_parts))
    }

    #[instrument(skip(self, patch))]
    async fn apply_patch(&self, user_id: i64, patch: &UserPatch) -> RepoResult<User> {
        // Fixed, enumerated set of conditional assignments. NOT NULL columns
        // use COALESCE (a NULL bind keeps the current value); the nullable
        // columns pair a presence flag with the value so an explicit NULL
        // clears them.
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET email = COALESCE($2, email),
                display_name = COALESCE($3, display_name),
                password_hash = COALESCE($4, password_hash),
                avatar = CASE WHEN $5 THEN $6 ELSE avatar END,
                bio = CASE WHEN $7 THEN $8 ELSE bio END
            WHERE id = $1
            RETURNING id, email, username, display_name, avatar, bio, is_verified, is_admin
            ",
        )
        .bind(user_id)
        .bind(patch.email.as_deref())
        .bind(patch.display_name.as_deref())
        .bind(patch.password_hash.as_deref())
        .bind(patch.avatar.is_some())
        .bind(patch.avatar.as_ref().and_then(Option::as_deref))
        .bind(patch.bio.is_some())
        .bind(patch.bio.as_ref().and_then(Option::as_deref))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IdentityTaken))?;

        result.map(User::from).ok_or_else(|| user_not_found(user_id))
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        exclude_user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<UserSummary>> {
        let pattern = format!("%{}%", escape_like(query));

        let results = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT id, username, display_name, avatar, is_verified
            FROM users
            WHERE (username ILIKE $1 OR display_name ILIKE $1) AND id <> $2
            ORDER BY id
            LIMIT $3
            ",
        )
        .bind(&pattern)
        .bind(exclude_user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserSummary::from).collect())
    }
}
