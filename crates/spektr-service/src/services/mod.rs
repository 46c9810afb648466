//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and implements the
//! operations for one slice of the domain.

pub mod auth;
pub mod chat;
pub mod context;
pub mod error;
pub mod message;
pub mod user;

pub use auth::AuthService;
pub use chat::ChatService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use user::UserService;
