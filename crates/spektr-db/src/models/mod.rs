//! Database models - SQLx-compatible structs for PostgreSQL tables

mod chat;
mod message;
mod reaction;
mod user;

pub use chat::ChatOverviewModel;
pub use message::MessageModel;
pub use reaction::ReactionModel;
pub use user::{UserCredentialsModel, UserModel, UserSummaryModel};
