//! Chat listing service

use tracing::instrument;

use crate::dto::{ChatListRequest, ChatResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every chat visible to a user
    ///
    /// Returns the user's participant chats plus all official chats, pinned
    /// first and then newest first. An empty list is a successful result.
    #[instrument(skip(self), fields(user_id = request.user_id))]
    pub async fn list_chats(&self, request: ChatListRequest) -> ServiceResult<Vec<ChatResponse>> {
        let overviews = self.ctx.chat_repo().list_for_user(request.user_id).await?;
        Ok(overviews.into_iter().map(ChatResponse::from).collect())
    }
}
