//! Review service module
//!
//! This module handles review submission and management:
//! - Field validation with fixed, ordered messages
//! - Rental existence and ownership checks before a review is accepted
//! - One review per (user, rental) pair
//! - Owner-or-admin edits and deletion
//! - Public listings with optional filters

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewReview, ReviewService, ReviewUpdate};
