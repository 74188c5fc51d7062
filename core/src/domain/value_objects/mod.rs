//! Value objects representing immutable domain concepts.

pub mod auth_session;
pub mod caller;
pub mod reports;

// Re-export commonly used types
pub use auth_session::AuthSession;
pub use caller::Caller;
pub use reports::{
    CarAvailability, CarPerformance, CategoryPopularity, HistoryCarDetails, HistoryReview,
    RatingEntry, RentalHistoryEntry, RentalStatistics, UserReviewStats,
};
