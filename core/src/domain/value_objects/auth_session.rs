//! Authentication session value object returned after register and login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Successful authentication result
///
/// Carries the signed access token, its lifetime in seconds, and the
/// authenticated user. The user's password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Signed JWT access token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// The authenticated user
    pub user: User,
}

impl AuthSession {
    /// Creates a new session from a freshly issued token
    pub fn new(token: String, expires_in: i64, user: User) -> Self {
        Self {
            token,
            expires_in,
            user,
        }
    }
}
