//! Trait definitions (ports) for the infrastructure layer

mod repositories;

pub use repositories::{ChatRepository, MessageRepository, RepoResult, UserRepository};
