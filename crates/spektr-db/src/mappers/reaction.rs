//! Reaction model ↔ entity conversions

use spektr_core::entities::Reaction;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Self {
            id: model.id,
            message_id: model.message_id,
            user_id: model.user_id,
            emoji: model.emoji,
        }
    }
}
