//! Review route handlers
//!
//! Public listings, authenticated submission against the caller's own
//! rentals, and owner-or-admin edits and deletion.

pub mod list;
pub mod manage;
pub mod submit;

pub use list::{list, list_for_car, list_own};
pub use manage::{delete, update};
pub use submit::submit;
