//! User entity representing a registered account in the DriveEasy system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel id carried by tokens issued to the synthetic admin login
///
/// The admin identity is matched against configured credentials rather than a
/// stored record, so it has no row of its own.
pub const ADMIN_USER_ID: Uuid = Uuid::nil();

/// Role of an account, used for authorization decisions
///
/// Deliberately a closed set: every authorization check matches exhaustively
/// on this enum rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular customer account
    User,
    /// The administrator identity
    Admin,
}

impl Role {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, unique across all users
    pub email: String,

    /// bcrypt password hash, never serialized into responses
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Contact phone number
    pub phone: String,

    /// Account role
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new registered user with the `User` role
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone: phone.into(),
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Synthesized profile record for the configured admin identity
    pub fn admin_profile(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ADMIN_USER_ID,
            name: String::from("Administrator"),
            email: email.into(),
            password_hash: String::new(),
            phone: String::new(),
            role: Role::Admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a profile update to name and/or phone
    pub fn update_profile(&mut self, name: Option<String>, phone: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }

    /// Checks if this account carries the admin role
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("Jane Doe", "jane@example.com", "$2b$12$hash", "+1 555 123 4567");

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_ne!(user.id, ADMIN_USER_ID);
    }

    #[test]
    fn test_admin_profile_uses_sentinel_id() {
        let admin = User::admin_profile("admin@driveeasy.com");

        assert_eq!(admin.id, ADMIN_USER_ID);
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.is_admin());
        assert!(admin.password_hash.is_empty());
    }

    #[test]
    fn test_update_profile() {
        let mut user = User::new("Jane", "jane@example.com", "hash", "111");
        let before = user.updated_at;

        user.update_profile(Some("Jane Smith".to_string()), None);
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.phone, "111");
        assert!(user.updated_at >= before);

        user.update_profile(None, Some("+61 400 000 000".to_string()));
        assert_eq!(user.phone, "+61 400 000 000");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new("Jane", "jane@example.com", "super-secret-hash", "111");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
