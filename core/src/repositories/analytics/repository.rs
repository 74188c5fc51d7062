//! Analytics repository trait for the read-only reporting queries.
//!
//! Every method is a pure read; the heavy lifting (joins, grouping, sums)
//! happens inside the implementation so the service layer only handles
//! parameter validation and access control.

use async_trait::async_trait;
use uuid::Uuid;

use de_shared::types::DateRange;

use crate::domain::value_objects::reports::{
    CarAvailability, CarPerformance, CategoryPopularity, RentalHistoryEntry, RentalStatistics,
    UserReviewStats,
};
use crate::errors::DomainError;

/// Repository trait for reporting aggregations
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Per-car rental totals for rentals picked up inside the range
    ///
    /// # Arguments
    /// * `range` - Pickup-date window, both ends inclusive
    /// * `category` - Optional filter on the joined car's category
    ///
    /// # Returns
    /// * Groups sorted by totalRevenue descending
    async fn rental_statistics(
        &self,
        range: DateRange,
        category: Option<&str>,
    ) -> Result<Vec<RentalStatistics>, DomainError>;

    /// A user's rentals joined with car details and any review
    ///
    /// # Returns
    /// * Entries sorted by pickup_date descending
    async fn user_rental_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RentalHistoryEntry>, DomainError>;

    /// Rental pressure on one car over a window
    ///
    /// Counts rentals overlapping the range. A window with no overlapping
    /// rentals yields the all-zero result, not an error.
    async fn car_availability(
        &self,
        car_id: Uuid,
        range: DateRange,
    ) -> Result<CarAvailability, DomainError>;

    /// Fleet size, demand, and average price per category
    ///
    /// # Returns
    /// * Categories sorted by totalRentals descending
    async fn category_popularity(&self) -> Result<Vec<CategoryPopularity>, DomainError>;

    /// Aggregate review activity for one user
    async fn user_review_stats(&self, user_id: Uuid) -> Result<UserReviewStats, DomainError>;

    /// Revenue, ratings, and utilization for one car
    async fn car_performance(&self, car_id: Uuid) -> Result<CarPerformance, DomainError>;
}
