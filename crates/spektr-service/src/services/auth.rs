//! Authentication service
//!
//! Handles user registration and credential login.

use tracing::{info, instrument, warn};
use validator::Validate;

use spektr_common::auth::{hash_password, verify_password};
use spektr_common::AppError;
use spektr_core::entities::NewUser;
use spektr_core::SAVED_CHAT_NAME;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Inserts the user, their saved-messages chat, and the pinned
    /// participant row in a single transaction. A uniqueness violation on
    /// email or username surfaces as a conflict.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            email: request.email,
            username: request.username,
            display_name: request.display_name,
        };

        let user = self
            .ctx
            .user_repo()
            .create_with_saved_chat(&new_user, &password_hash, SAVED_CHAT_NAME)
            .await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(AuthResponse::new(user.into()))
    }

    /// Login with username and password
    ///
    /// Fails with a generic credential error, never revealing whether the
    /// username or the password was wrong.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let (user, password_hash) = self
            .ctx
            .user_repo()
            .find_for_login(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)?;
        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        Ok(AuthResponse::new(user.into()))
    }
}
