//! Reaction entity - an emoji attached to a message by a user
//!
//! Read-only from this crate's perspective: reactions are created by an
//! external collaborator and only aggregated here.

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub message_id: i64,
    pub user_id: i64,
    pub emoji: String,
}
