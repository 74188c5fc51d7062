//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::Role;
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// A freshly signed access token together with its lifetime in seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Stateless issuer and verifier for HS256 access tokens
///
/// The signing and verification keys are derived once from the configured
/// secret; verification checks signature, expiry, not-before, issuer, and
/// audience in one pass.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs an access token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID (the sentinel nil UUID for the admin)
    /// * `email` - Email recorded in the claims
    /// * `role` - Role recorded in the claims
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and its lifetime
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_token(&self, user_id: Uuid, email: &str, role: Role) -> DomainResult<IssuedToken> {
        let mut claims = Claims::new(user_id, email, role, self.config.expiry_hours);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.expiry_hours * 3600,
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is expired, malformed, or tampered
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    TokenError::Expired
                } else {
                    TokenError::Invalid
                }
            })?;

        Ok(token_data.claims)
    }
}
