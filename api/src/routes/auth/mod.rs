//! Authentication route handlers
//!
//! Endpoints for account registration, email/password login, and the
//! authenticated caller's profile.

pub mod login;
pub mod profile;
pub mod register;

pub use login::login;
pub use profile::{profile, update_profile};
pub use register::register;
