//! Domain-specific error types for authentication, tokens, and booking validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email/password combination (stored user or admin pair)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that is already taken
    #[error("User already exists")]
    EmailTaken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    /// Malformed, tampered, or otherwise unverifiable token
    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Booking validation failure: the offending field plus the rule message
///
/// Produced by the booking validator; the first rule to fail wins and no
/// further rules are evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BookingError {
    pub field: String,
    pub message: String,
}

impl BookingError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
