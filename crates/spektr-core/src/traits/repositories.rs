//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{ChatOverview, Message, MessageDraft, NewUser, Reaction, User, UserPatch, UserSummary};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user together with their saved-messages chat and pinned
    /// participant row, atomically. Returns the public user record.
    ///
    /// A uniqueness violation on email or username surfaces as
    /// [`DomainError::IdentityTaken`].
    async fn create_with_saved_chat(
        &self,
        new_user: &NewUser,
        password_hash: &str,
        saved_chat_name: &str,
    ) -> RepoResult<User>;

    /// Look up a user by username together with their stored password digest.
    /// Returns None when the username is unknown.
    async fn find_for_login(&self, username: &str) -> RepoResult<Option<(User, String)>>;

    /// Apply a sparse profile update and return the resulting public record.
    ///
    /// The caller must reject an empty patch before getting here.
    async fn apply_patch(&self, user_id: i64, patch: &UserPatch) -> RepoResult<User>;

    /// Case-insensitive substring search over username and display name,
    /// excluding one user id, capped at `limit` rows.
    async fn search(&self, query: &str, exclude_user_id: i64, limit: i64)
        -> RepoResult<Vec<UserSummary>>;
}

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Every chat visible to the user: chats they participate in plus all
    /// official chats, with per-user flags and aggregated last-message and
    /// message-count fields. Ordered pinned-first, then newest chat first.
    async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<ChatOverview>>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// All messages of a chat in chronological order (oldest first)
    async fn list_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>>;

    /// All reactions on any message of the chat, ordered by reaction id
    async fn reactions_for_chat(&self, chat_id: i64) -> RepoResult<Vec<Reaction>>;

    /// Insert one message; the store assigns id and timestamps. Returns the
    /// full inserted record.
    async fn create(&self, draft: &MessageDraft) -> RepoResult<Message>;
}
