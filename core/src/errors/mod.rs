//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, BookingError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Every service returns `DomainResult<T>`; the API layer maps each variant
/// onto an HTTP status and the standard response envelope in one place.
#[derive(Error, Debug)]
pub enum DomainError {
    /// User-correctable input problem (400)
    #[error("{message}")]
    Validation { field: String, message: String },

    /// No valid identity attached to the request (401)
    #[error("Authentication required")]
    Unauthenticated,

    /// Role or ownership mismatch (403)
    #[error("{message}")]
    Forbidden { message: String },

    /// Resource lookup failed (404)
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Unique-constraint violation (400)
    #[error("{message}")]
    Duplicate { message: String },

    /// Underlying storage failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else unexpected (500)
    #[error("Internal error: {0}")]
    Internal(String),

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl DomainError {
    /// Validation failure for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Role or ownership rejection with a caller-facing message
    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    /// Missing resource, named for the 404 message
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Unique-constraint rejection with a caller-facing message
    pub fn duplicate(message: impl Into<String>) -> Self {
        DomainError::Duplicate {
            message: message.into(),
        }
    }

    /// Whether this error must be hidden behind a generic 500 message
    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Database(_) | DomainError::Internal(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
