//! Token service module for JWT management
//!
//! This module handles access token issuing and verification. Tokens are
//! stateless HS256 JWTs; there is no refresh flow and no revocation list,
//! a token stays valid until its expiry.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::{IssuedToken, TokenService};
