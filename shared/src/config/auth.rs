//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in hours
    pub expiry_hours: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            expiry_hours: 24,
            issuer: String::from("drive-easy"),
            audience: String::from("drive-easy-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_hours = hours;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

/// Synthetic admin login credentials
///
/// The admin identity is not a stored user record; it is matched against this
/// configured email/password pair at login time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Admin login email
    pub email: String,

    /// Admin login password (plaintext comparison against the configured value)
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: String::from("admin@driveeasy.com"),
            password: String::from("change-me"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Synthetic admin credentials
    pub admin: AdminConfig,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            admin: AdminConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string());
        let expiry_hours = std::env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@driveeasy.com".to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string());
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);

        Self {
            jwt: JwtConfig::new(secret).with_expiry_hours(expiry_hours),
            admin: AdminConfig {
                email: admin_email,
                password: admin_password,
            },
            bcrypt_cost,
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get token expiry in hours
    pub fn token_expiry_hours(&self) -> i64 {
        self.jwt.expiry_hours
    }
}

fn default_bcrypt_cost() -> u32 {
    // bcrypt::DEFAULT_COST
    12
}
