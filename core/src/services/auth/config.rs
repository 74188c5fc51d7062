//! Configuration for the authentication service

use de_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Email accepted for the synthetic admin login
    pub admin_email: String,
    /// Password accepted for the synthetic admin login
    pub admin_password: String,
    /// Bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@driveeasy.com".to_string(),
            admin_password: "change-me".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            admin_email: config.admin.email.clone(),
            admin_password: config.admin.password.clone(),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
