//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of the repository traits
//! using SQLx for database operations.

pub mod analytics_repository_impl;
pub mod car_repository_impl;
pub mod rental_repository_impl;
pub mod review_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use analytics_repository_impl::MySqlAnalyticsRepository;
pub use car_repository_impl::MySqlCarRepository;
pub use rental_repository_impl::MySqlRentalRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use user_repository_impl::MySqlUserRepository;
