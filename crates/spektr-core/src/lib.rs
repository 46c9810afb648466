//! # spektr-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Chat, ChatKind, ChatOverview, ChatParticipant, Message, MessageDraft, MessageKind, NewUser,
    Reaction, User, UserPatch, UserSummary, SAVED_CHAT_NAME,
};
pub use error::DomainError;
pub use traits::{ChatRepository, MessageRepository, RepoResult, UserRepository};
