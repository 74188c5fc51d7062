//! Request and response DTOs for the HTTP layer.
//!
//! Wire names are camelCase throughout; conversions into the domain types
//! live next to each DTO. Entities are never serialized directly onto the
//! wire.

pub mod analytics;
pub mod auth;
pub mod car;
pub mod rental;
pub mod review;

/// First failure message out of a validator run
///
/// Mirrors the client contract of reporting one rule at a time.
pub fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| String::from("Invalid request data"))
}
