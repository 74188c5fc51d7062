//! Main analytics service implementation

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use de_shared::types::DateRange;

use crate::domain::value_objects::reports::{
    CarAvailability, CarPerformance, CategoryPopularity, RentalHistoryEntry, RentalStatistics,
    UserReviewStats,
};
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AnalyticsRepository;

/// Analytics service for the reporting endpoints
///
/// Fleet-wide reports are admin only; per-user reports are admin-or-self;
/// the category summary is public.
pub struct AnalyticsService<A: AnalyticsRepository> {
    /// Analytics repository running the reporting queries
    analytics_repository: Arc<A>,
}

impl<A: AnalyticsRepository> AnalyticsService<A> {
    /// Create a new analytics service
    pub fn new(analytics_repository: Arc<A>) -> Self {
        Self {
            analytics_repository,
        }
    }

    /// Per-car rental counts, revenue, and average duration over a window
    ///
    /// Admin only. `start_date` and `end_date` arrive as raw query strings
    /// and must both be present and well-formed.
    pub async fn rental_statistics(
        &self,
        caller: &Caller,
        start_date: Option<&str>,
        end_date: Option<&str>,
        category: Option<&str>,
    ) -> DomainResult<Vec<RentalStatistics>> {
        Self::require_admin(caller)?;
        let range = Self::parse_range(start_date, end_date)?;

        self.analytics_repository
            .rental_statistics(range, category)
            .await
    }

    /// A user's rental history with car details and reviews attached
    ///
    /// Admin or the user themselves.
    pub async fn user_rental_history(
        &self,
        caller: &Caller,
        user_id: Uuid,
    ) -> DomainResult<Vec<RentalHistoryEntry>> {
        Self::require_self_or_admin(caller, user_id)?;
        self.analytics_repository.user_rental_history(user_id).await
    }

    /// Rental pressure on one car over a window
    ///
    /// Admin only. An empty window yields the all-zero result.
    pub async fn car_availability(
        &self,
        caller: &Caller,
        car_id: Uuid,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> DomainResult<CarAvailability> {
        Self::require_admin(caller)?;
        let range = Self::parse_range(start_date, end_date)?;

        self.analytics_repository
            .car_availability(car_id, range)
            .await
    }

    /// Fleet size, demand, and average price per category; public
    pub async fn category_popularity(&self) -> DomainResult<Vec<CategoryPopularity>> {
        self.analytics_repository.category_popularity().await
    }

    /// Aggregate review activity for one user
    ///
    /// Admin or the user themselves.
    pub async fn user_review_stats(
        &self,
        caller: &Caller,
        user_id: Uuid,
    ) -> DomainResult<UserReviewStats> {
        Self::require_self_or_admin(caller, user_id)?;
        self.analytics_repository.user_review_stats(user_id).await
    }

    /// Revenue, ratings, and utilization for one car
    ///
    /// Admin only.
    pub async fn car_performance(
        &self,
        caller: &Caller,
        car_id: Uuid,
    ) -> DomainResult<CarPerformance> {
        Self::require_admin(caller)?;
        self.analytics_repository.car_performance(car_id).await
    }

    fn require_admin(caller: &Caller) -> DomainResult<()> {
        if caller.is_admin() {
            Ok(())
        } else {
            Err(DomainError::forbidden("Admin access required"))
        }
    }

    fn require_self_or_admin(caller: &Caller, user_id: Uuid) -> DomainResult<()> {
        if caller.can_access_user(user_id) {
            Ok(())
        } else {
            Err(DomainError::forbidden(
                "Not authorized to access this data",
            ))
        }
    }

    /// Turn the raw query-string dates into a validated window
    ///
    /// Both dates must be present; either one missing or blank produces the
    /// shared "required" message. Dates parse as `YYYY-MM-DD`.
    fn parse_range(start_date: Option<&str>, end_date: Option<&str>) -> DomainResult<DateRange> {
        let (start_raw, end_raw) = match (start_date, end_date) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                (start.trim(), end.trim())
            }
            _ => {
                return Err(DomainError::validation(
                    "startDate",
                    "Start date and end date are required",
                ))
            }
        };

        let start = NaiveDate::parse_from_str(start_raw, "%Y-%m-%d")
            .map_err(|_| DomainError::validation("startDate", "Invalid date format"))?;
        let end = NaiveDate::parse_from_str(end_raw, "%Y-%m-%d")
            .map_err(|_| DomainError::validation("endDate", "Invalid date format"))?;

        Ok(DateRange::new(start, end))
    }
}
