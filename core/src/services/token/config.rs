//! Configuration for the token service

use de_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_HOURS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Access token expiry in hours
    pub expiry_hours: i64,
    /// Issuer stamped into and required from every token
    pub issuer: String,
    /// Audience stamped into and required from every token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            expiry_hours: TOKEN_EXPIRY_HOURS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_hours: config.expiry_hours,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
