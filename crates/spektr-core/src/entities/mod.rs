//! Domain entities for the messenger data layer

mod chat;
mod message;
mod reaction;
mod user;

pub use chat::{Chat, ChatKind, ChatOverview, ChatParticipant, SAVED_CHAT_NAME};
pub use message::{Message, MessageDraft, MessageKind};
pub use reaction::Reaction;
pub use user::{NewUser, User, UserPatch, UserSummary};
