//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the DriveEasy backend.
//! It provides the concrete MySQL implementations of the repository traits
//! declared in `de_core`, plus connection pool management and migrations.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx
//! - **Connection**: Pool construction, health checks, migrations
//!
//! Everything above this crate talks to the `de_core` repository traits;
//! nothing outside this crate writes SQL.

/// Database module - MySQL implementations using SQLx
pub mod database;

// Re-export the pool and repositories for convenience
pub use database::{
    DatabasePool, MySqlAnalyticsRepository, MySqlCarRepository, MySqlRentalRepository,
    MySqlReviewRepository, MySqlUserRepository, PoolStatistics,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
