//! User service
//!
//! Profile updates and user search.

use tracing::{info, instrument};
use validator::Validate;

use spektr_common::auth::hash_password;
use spektr_core::entities::UserPatch;

use crate::dto::{SearchUsersRequest, UpdateProfileRequest, UserResponse, UserSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum results returned by a user search
const SEARCH_LIMIT: i64 = 20;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a sparse profile update
    ///
    /// Absent fields are left untouched. A payload with no updatable
    /// fields is rejected before reaching the store. A present password is
    /// re-hashed; the plaintext never leaves this function.
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        if !request.has_changes() {
            return Err(ServiceError::validation("no fields to update"));
        }
        request.validate()?;

        let password_hash = match &request.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let patch = UserPatch {
            email: request.email,
            display_name: request.display_name,
            password_hash,
            avatar: request.avatar,
            bio: request.bio,
        };

        let user = self
            .ctx
            .user_repo()
            .apply_patch(request.user_id, &patch)
            .await?;

        info!(user_id = user.id, "Profile updated");

        Ok(user.into())
    }

    /// Search users by substring on username or display name
    ///
    /// Case-insensitive, requester excluded, at most 20 results in id
    /// order.
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn search_users(
        &self,
        request: SearchUsersRequest,
    ) -> ServiceResult<Vec<UserSummaryResponse>> {
        request.validate()?;

        let matches = self
            .ctx
            .user_repo()
            .search(&request.query, request.user_id, SEARCH_LIMIT)
            .await?;

        Ok(matches.into_iter().map(UserSummaryResponse::from).collect())
    }
}
