//! JWT claims carried by DriveEasy access tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Access token lifetime in hours
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Issuer recorded in every token
pub const JWT_ISSUER: &str = "drive-easy";

/// Audience recorded in every token
pub const JWT_AUDIENCE: &str = "drive-easy-api";

/// Claims embedded in a signed access token
///
/// The subject is the user's UUID; role decides whether admin-only
/// routes accept the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user's unique identifier
    pub sub: String,

    /// Email address at the time of issue
    pub email: String,

    /// Role at the time of issue
    pub role: Role,

    /// Issued-at as a Unix timestamp
    pub iat: i64,

    /// Expiry as a Unix timestamp
    pub exp: i64,

    /// Not-before as a Unix timestamp
    pub nbf: i64,

    /// Issuer, always [`JWT_ISSUER`]
    pub iss: String,

    /// Audience, always [`JWT_AUDIENCE`]
    pub aud: String,

    /// Unique token identifier
    pub jti: String,
}

impl Claims {
    /// Builds claims for a freshly issued token
    pub fn new(user_id: Uuid, email: impl Into<String>, role: Role, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::hours(expiry_hours);

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Returns true once the expiry timestamp has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns true while the token is inside its validity window
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Shortcut for role-based checks at the route boundary
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_window() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com", Role::User, TOKEN_EXPIRY_HOURS);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_HOURS * 3600);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims_detected() {
        let mut claims = Claims::new(Uuid::new_v4(), "user@example.com", Role::User, 1);
        claims.exp = Utc::now().timestamp() - 60;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_user_id_round_trip() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com", Role::Admin, 1);

        assert_eq!(claims.user_id(), Some(user_id));
        assert!(claims.is_admin());
    }

    #[test]
    fn test_malformed_subject_yields_none() {
        let mut claims = Claims::new(Uuid::new_v4(), "user@example.com", Role::User, 1);
        claims.sub = "not-a-uuid".to_string();

        assert_eq!(claims.user_id(), None);
    }
}
