//! Message service
//!
//! Listing messages with their reaction aggregates, and inserting new
//! messages.

use std::collections::HashMap;

use tracing::{info, instrument};
use validator::Validate;

use spektr_core::entities::{MessageDraft, Reaction};

use crate::dto::{MessageListRequest, MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all messages of a chat in chronological order
    ///
    /// Reactions for the whole chat are fetched in one query and grouped
    /// per message in memory, preserving their stored order.
    #[instrument(skip(self), fields(chat_id = request.chat_id))]
    pub async fn list_messages(
        &self,
        request: MessageListRequest,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self.ctx.message_repo().list_by_chat(request.chat_id).await?;
        let reactions = self
            .ctx
            .message_repo()
            .reactions_for_chat(request.chat_id)
            .await?;

        let mut by_message: HashMap<i64, Vec<Reaction>> = HashMap::new();
        for reaction in reactions {
            by_message.entry(reaction.message_id).or_default().push(reaction);
        }

        Ok(messages
            .into_iter()
            .map(|message| {
                let pairs = by_message.remove(&message.id).unwrap_or_default();
                MessageResponse::with_reactions(message, &pairs)
            })
            .collect())
    }

    /// Insert a single message
    ///
    /// The store assigns the id and both timestamps; the full inserted
    /// record is returned so the caller can reconcile optimistic state.
    /// Sender participation in the chat is not checked here, only the
    /// foreign key constraints apply.
    #[instrument(skip(self, request), fields(chat_id = request.chat_id, sender_id = request.sender_id))]
    pub async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;

        let draft = MessageDraft {
            chat_id: request.chat_id,
            sender_id: request.sender_id,
            content: request.content,
            kind: request.kind,
            media_url: request.media_url,
        };

        let message = self.ctx.message_repo().create(&draft).await?;

        info!(message_id = message.id, "Message sent");

        Ok(MessageResponse::with_reactions(message, &[]))
    }
}
