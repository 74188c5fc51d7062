//! Caller identity extracted from a verified access token.

use uuid::Uuid;

use crate::domain::entities::user::Role;

/// Identity of the authenticated caller for a single request
///
/// Built from verified token claims, never from request bodies. Services
/// take a `Caller` wherever an operation is owner-scoped or admin-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's user id
    pub user_id: Uuid,

    /// The caller's email address
    pub email: String,

    /// The caller's role
    pub role: Role,
}

impl Caller {
    /// Creates a caller identity
    pub fn new(user_id: Uuid, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Returns true for administrator callers
    pub fn is_admin(&self) -> bool {
        match self.role {
            Role::Admin => true,
            Role::User => false,
        }
    }

    /// Admin-or-self check for user-scoped data
    pub fn can_access_user(&self, user_id: Uuid) -> bool {
        match self.role {
            Role::Admin => true,
            Role::User => self.user_id == user_id,
        }
    }
}
