//! Chat entity and the per-user participant state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name given to the saved-messages chat created at registration.
pub const SAVED_CHAT_NAME: &str = "Saved Messages";

/// Chat type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Direct,
    Group,
    Saved,
    Official,
    Channel,
}

impl ChatKind {
    /// Tag as stored in the `chats.type` column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
            Self::Saved => "saved",
            Self::Official => "official",
            Self::Channel => "channel",
        }
    }

    /// Parse a stored tag; returns None for unrecognized values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(Self::Direct),
            "group" => Some(Self::Group),
            "saved" => Some(Self::Saved),
            "official" => Some(Self::Official),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }
}

/// Chat entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
    pub name: Option<String>,
    pub is_official: bool,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Check if this is a saved-messages chat
    #[inline]
    pub fn is_saved(&self) -> bool {
        self.kind == ChatKind::Saved
    }
}

/// Join entity binding a (chat, user) pair with per-user chat state.
///
/// One row per pair; the store enforces the uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParticipant {
    pub chat_id: i64,
    pub user_id: i64,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub is_blocked: bool,
}

/// A chat as it appears in one user's chat list.
///
/// Participant flags are None when the viewer has no participant row (an
/// official chat they never joined). `unread_count` is the total message
/// count of the chat; there is no read-marker entity to subtract against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOverview {
    pub chat: Chat,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
    pub is_blocked: Option<bool>,
    pub last_message: Option<String>,
    pub unread_count: i64,
}

impl ChatOverview {
    /// Pinned state used for ordering: a missing participant row counts as unpinned
    #[inline]
    pub fn pinned_for_sort(&self) -> bool {
        self.is_pinned.unwrap_or(false)
    }
}
