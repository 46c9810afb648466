//! User entity - represents a registered account

/// Public subset of a user account.
///
/// This is everything the data layer ever hands back about a user; the
/// password digest lives only in the store and in the login lookup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub is_admin: bool,
}

/// Fields required to create a new user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub display_name: String,
}

/// Sparse profile update: one optional slot per mutable column.
///
/// Absent fields are left untouched by the store. The nullable columns
/// (`avatar`, `bio`) carry a second level of `Option`: the outer level is
/// present-vs-absent, the inner `None` clears the column. The password slot
/// carries the already-hashed digest; plaintext never crosses this boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
    pub avatar: Option<Option<String>>,
    pub bio: Option<Option<String>>,
}

impl UserPatch {
    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.display_name.is_none()
            && self.password_hash.is_none()
            && self.avatar.is_none()
            && self.bio.is_none()
    }
}

/// Reduced user record returned by search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
}
