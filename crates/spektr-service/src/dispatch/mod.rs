//! Action dispatcher
//!
//! Maps a named action plus a JSON payload to exactly one operation. The
//! action set is a closed enum: every variant is matched exhaustively and
//! an unrecognized name is rejected before any data-store access.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::dto::{
    AuthResponse, ChatListRequest, ChatResponse, LoginRequest, MessageListRequest,
    MessageResponse, RegisterRequest, SearchUsersRequest, SendMessageRequest,
    UpdateProfileRequest, UserResponse, UserSummaryResponse,
};
use crate::services::{
    AuthService, ChatService, MessageService, ServiceContext, ServiceError, ServiceResult,
    UserService,
};

/// A fully decoded action request
#[derive(Debug)]
pub enum Action {
    Register(RegisterRequest),
    Login(LoginRequest),
    GetChats(ChatListRequest),
    GetMessages(MessageListRequest),
    SendMessage(SendMessageRequest),
    UpdateProfile(UpdateProfileRequest),
    SearchUsers(SearchUsersRequest),
}

impl Action {
    /// Decode an action from its wire name and JSON payload
    ///
    /// The name is matched exactly; anything else is `UnknownAction`. A
    /// payload that fails to decode for a known action is a validation
    /// error, not an unknown action.
    pub fn from_parts(name: &str, payload: Value) -> ServiceResult<Self> {
        let action = match name {
            "register" => Self::Register(decode(payload)?),
            "login" => Self::Login(decode(payload)?),
            "get_chats" => Self::GetChats(decode(payload)?),
            "get_messages" => Self::GetMessages(decode(payload)?),
            "send_message" => Self::SendMessage(decode(payload)?),
            "update_profile" => Self::UpdateProfile(decode(payload)?),
            "search_users" => Self::SearchUsers(decode(payload)?),
            _ => return Err(ServiceError::UnknownAction),
        };
        Ok(action)
    }

    /// Wire name of this action
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::Login(_) => "login",
            Self::GetChats(_) => "get_chats",
            Self::GetMessages(_) => "get_messages",
            Self::SendMessage(_) => "send_message",
            Self::UpdateProfile(_) => "update_profile",
            Self::SearchUsers(_) => "search_users",
        }
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> ServiceResult<T> {
    serde_json::from_value(payload).map_err(|e| ServiceError::Validation(e.to_string()))
}

/// Success envelope for each action
///
/// Serialized untagged so each variant produces exactly the wire shape
/// the client expects.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionReply {
    /// `{success: true, user}` for register and login
    Auth(AuthResponse),
    /// `{chats: [...]}`
    Chats { chats: Vec<ChatResponse> },
    /// `{messages: [...]}`
    Messages { messages: Vec<MessageResponse> },
    /// `{message: {...}}`
    Sent { message: MessageResponse },
    /// `{user: {...}}`
    Profile { user: UserResponse },
    /// `{users: [...]}`
    Users { users: Vec<UserSummaryResponse> },
}

/// Route a decoded action to its operation
#[instrument(skip(ctx, action), fields(action = action.name()))]
pub async fn dispatch(ctx: &ServiceContext, action: Action) -> ServiceResult<ActionReply> {
    match action {
        Action::Register(req) => AuthService::new(ctx)
            .register(req)
            .await
            .map(ActionReply::Auth),
        Action::Login(req) => AuthService::new(ctx).login(req).await.map(ActionReply::Auth),
        Action::GetChats(req) => ChatService::new(ctx)
            .list_chats(req)
            .await
            .map(|chats| ActionReply::Chats { chats }),
        Action::GetMessages(req) => MessageService::new(ctx)
            .list_messages(req)
            .await
            .map(|messages| ActionReply::Messages { messages }),
        Action::SendMessage(req) => MessageService::new(ctx)
            .send_message(req)
            .await
            .map(|message| ActionReply::Sent { message }),
        Action::UpdateProfile(req) => UserService::new(ctx)
            .update_profile(req)
            .await
            .map(|user| ActionReply::Profile { user }),
        Action::SearchUsers(req) => UserService::new(ctx)
            .search_users(req)
            .await
            .map(|users| ActionReply::Users { users }),
    }
}
