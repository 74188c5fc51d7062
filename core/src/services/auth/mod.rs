//! Authentication service module
//!
//! This module provides the account system:
//! - User registration with bcrypt password hashing
//! - Email/password login, including the synthetic admin account
//! - Profile lookup and update

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
