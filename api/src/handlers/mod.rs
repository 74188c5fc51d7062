//! Shared handler utilities.

pub mod error;

pub use error::{domain_error_response, ApiError, INTERNAL_ERROR_MESSAGE};
