//! Chat model ↔ entity conversions

use spektr_core::entities::{Chat, ChatKind, ChatOverview};

use crate::models::ChatOverviewModel;

impl From<ChatOverviewModel> for ChatOverview {
    fn from(model: ChatOverviewModel) -> Self {
        // Tags written by collaborators outside this crate may drift; an
        // unrecognized tag reads as a group chat rather than failing the list.
        let kind = ChatKind::parse(&model.kind).unwrap_or(ChatKind::Group);

        Self {
            chat: Chat {
                id: model.id,
                kind,
                name: model.name,
                is_official: model.is_official,
                created_at: model.created_at,
            },
            is_pinned: model.is_pinned,
            is_archived: model.is_archived,
            is_blocked: model.is_blocked,
            last_message: model.last_message,
            unread_count: model.unread_count,
        }
    }
}
