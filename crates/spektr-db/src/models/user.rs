//! User database models

use sqlx::FromRow;

/// Public row subset of the users table; never carries the password digest
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub is_admin: bool,
}

/// Login lookup row: public subset plus the stored digest
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentialsModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub is_admin: bool,
    pub password_hash: String,
}

/// Reduced row returned by search
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryModel {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
}
