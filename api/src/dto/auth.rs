//! DTOs for registration, login, and profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use de_core::domain::entities::user::{Role, User};
use de_core::domain::value_objects::AuthSession;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    /// Plaintext password; bcrypt-hashed before it reaches storage
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Token plus the authenticated account, returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            expires_in: session.expires_in,
            user: UserResponse::from(session.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "12345".to_string(),
            phone: "555-0100".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            crate::dto::first_validation_message(&errors),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            phone: "555-0100".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_serializes_camel_case() {
        let user = User::new("Jane", "jane@example.com", "hash", "555-0100");
        let response = UserResponse::from(user);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_auth_response_from_session() {
        let user = User::new("Jane", "jane@example.com", "hash", "555-0100");
        let session = AuthSession::new("signed.jwt".to_string(), 86_400, user);
        let response = AuthResponse::from(session);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "signed.jwt");
        assert_eq!(json["expiresIn"], 86_400);
        assert_eq!(json["user"]["email"], "jane@example.com");
    }
}
