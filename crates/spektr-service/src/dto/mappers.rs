//! Entity-to-DTO conversions

use spektr_core::entities::{ChatOverview, Message, Reaction, User, UserSummary};

use super::responses::{
    ChatResponse, MessageResponse, ReactionResponse, UserResponse, UserSummaryResponse,
};

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            bio: user.bio,
            is_verified: user.is_verified,
            is_admin: user.is_admin,
        }
    }
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            username: summary.username,
            display_name: summary.display_name,
            avatar: summary.avatar,
            is_verified: summary.is_verified,
        }
    }
}

impl From<ChatOverview> for ChatResponse {
    fn from(overview: ChatOverview) -> Self {
        Self {
            id: overview.chat.id,
            kind: overview.chat.kind.as_str().to_string(),
            name: overview.chat.name,
            is_official: overview.chat.is_official,
            created_at: overview.chat.created_at,
            is_pinned: overview.is_pinned,
            is_archived: overview.is_archived,
            is_blocked: overview.is_blocked,
            last_message: overview.last_message,
            unread_count: overview.unread_count,
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            user_id: reaction.user_id,
            emoji: reaction.emoji.clone(),
        }
    }
}

impl MessageResponse {
    /// Pair a message with its ordered reactions
    pub fn with_reactions(message: Message, reactions: &[Reaction]) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            content: message.content,
            kind: message.kind,
            media_url: message.media_url,
            is_edited: message.is_edited,
            created_at: message.created_at,
            updated_at: message.updated_at,
            reactions: reactions.iter().map(ReactionResponse::from).collect(),
        }
    }
}
