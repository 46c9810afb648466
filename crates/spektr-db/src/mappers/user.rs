//! User model ↔ entity conversions

use spektr_core::entities::{User, UserSummary};

use crate::models::{UserCredentialsModel, UserModel, UserSummaryModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            username: model.username,
            display_name: model.display_name,
            avatar: model.avatar,
            bio: model.bio,
            is_verified: model.is_verified,
            is_admin: model.is_admin,
        }
    }
}

impl UserCredentialsModel {
    /// Split into the public user record and the stored digest
    pub fn into_parts(self) -> (User, String) {
        let user = User {
            id: self.id,
            email: self.email,
            username: self.username,
            display_name: self.display_name,
            avatar: self.avatar,
            bio: self.bio,
            is_verified: self.is_verified,
            is_admin: self.is_admin,
        };
        (user, self.password_hash)
    }
}

impl From<UserSummaryModel> for UserSummary {
    fn from(model: UserSummaryModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            display_name: model.display_name,
            avatar: model.avatar,
            is_verified: model.is_verified,
        }
    }
}
