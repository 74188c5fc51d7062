//! Shared utilities and common types for the DriveEasy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The standard API response envelope
//! - Validation utilities (email/phone patterns, date parsing)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AdminConfig, AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    ServerConfig,
};
pub use types::{ApiResponse, DateRange};
pub use utils::validation;
