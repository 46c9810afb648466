//! PostgreSQL repository implementations

mod chat;
mod error;
mod message;
mod user;

pub use chat::PgChatRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
