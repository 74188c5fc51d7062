//! Rental service module
//!
//! This module handles the booking workflow:
//! - The ordered booking validation rule chain
//! - Rental creation bound to the authenticated caller
//! - Admin and per-user rental listings
//! - Admin rental deletion

mod service;
mod validator;

#[cfg(test)]
mod tests;

pub use service::RentalService;
pub use validator::{validate_booking, BookingRequest, ValidBooking};
