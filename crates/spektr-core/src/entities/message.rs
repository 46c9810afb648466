//! Message entity - a single message inside a chat

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message type tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Video,
    Audio,
    File,
}

impl MessageKind {
    /// Tag as stored in the `messages.type` column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::File => "file",
        }
    }

    /// Parse a stored tag; returns None for unrecognized values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// Message entity. Immutable once created; the store assigns id and both
/// timestamps at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub kind: MessageKind,
    pub media_url: Option<String>,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Check if the message carries a media reference
    #[inline]
    pub fn has_media(&self) -> bool {
        self.media_url.is_some()
    }

    /// Get a truncated preview of the content (for chat list previews)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

/// Everything the caller supplies for a new message; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub kind: MessageKind,
    pub media_url: Option<String>,
}

impl MessageDraft {
    /// Create a plain text draft
    pub fn text(chat_id: i64, sender_id: i64, content: String) -> Self {
        Self {
            chat_id,
            sender_id,
            content,
            kind: MessageKind::Text,
            media_url: None,
        }
    }
}
