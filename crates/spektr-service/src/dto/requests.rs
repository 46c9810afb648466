//! Request DTOs for the action dispatcher
//!
//! All request DTOs implement `Deserialize` and, where input constraints
//! apply, `Validate`. Payload keys are camelCase on the wire.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use spektr_core::entities::MessageKind;

/// Deserialize a field that distinguishes present-but-null from absent.
///
/// Serde collapses both cases into `None` for a plain `Option`; wrapping the
/// value in an outer `Some` here keeps `{"avatar": null}` (clear the column)
/// apart from the key being missing (leave it alone).
fn nullable_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// `register` payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// `login` payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// `get_chats` payload
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatListRequest {
    pub user_id: i64,
}

// ============================================================================
// Message Requests
// ============================================================================

/// `get_messages` payload
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListRequest {
    pub chat_id: i64,
}

/// `send_message` payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub chat_id: i64,

    pub sender_id: i64,

    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: String,

    /// Message kind, defaults to `"text"` when absent
    #[serde(rename = "type", default)]
    pub kind: MessageKind,

    pub media_url: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// `update_profile` payload
///
/// Sparse update: absent fields are left untouched. The nullable fields
/// (`avatar`, `bio`) accept an explicit `null` to clear the stored value.
/// An update with no fields present is rejected before reaching the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_id: i64,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    #[serde(default, deserialize_with = "nullable_field")]
    pub avatar: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable_field")]
    pub bio: Option<Option<String>>,
}

impl UpdateProfileRequest {
    /// Whether any updatable field is present
    pub fn has_changes(&self) -> bool {
        self.email.is_some()
            || self.display_name.is_some()
            || self.password.is_some()
            || self.avatar.is_some()
            || self.bio.is_some()
    }
}

/// `search_users` payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersRequest {
    #[validate(length(min = 1, max = 100, message = "Query must be 1-100 characters"))]
    pub query: String,

    /// Requesting user, always excluded from results
    pub user_id: i64,
}
