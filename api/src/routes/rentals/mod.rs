//! Rental booking route handlers
//!
//! Booking creation for authenticated users, the caller's own listing, and
//! the admin-only full listing and deletion.

pub mod create;
pub mod delete;
pub mod list;

pub use create::create;
pub use delete::delete;
pub use list::{list_all, list_own};
