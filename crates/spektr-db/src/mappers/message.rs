//! Message model ↔ entity conversions

use spektr_core::entities::{Message, MessageKind};

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Self {
            id: model.id,
            chat_id: model.chat_id,
            sender_id: model.sender_id,
            content: model.content,
            // unrecognized tags read as plain text
            kind: MessageKind::parse(&model.kind).unwrap_or(MessageKind::Text),
            media_url: model.media_url,
            is_edited: model.is_edited,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
