//! Mock implementation of AnalyticsRepository for testing
//!
//! The real aggregations live in SQL; this mock replays canned results so
//! service tests can focus on access control and parameter validation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use de_shared::types::DateRange;

use crate::domain::value_objects::reports::{
    CarAvailability, CarPerformance, CategoryPopularity, RentalHistoryEntry, RentalStatistics,
    UserReviewStats,
};
use crate::errors::DomainError;

use super::repository::AnalyticsRepository;

/// Mock analytics repository replaying preset results
#[derive(Default)]
pub struct MockAnalyticsRepository {
    rental_stats: Arc<RwLock<Vec<RentalStatistics>>>,
    history: Arc<RwLock<HashMap<Uuid, Vec<RentalHistoryEntry>>>>,
    availability: Arc<RwLock<HashMap<Uuid, CarAvailability>>>,
    categories: Arc<RwLock<Vec<CategoryPopularity>>>,
    review_stats: Arc<RwLock<HashMap<Uuid, UserReviewStats>>>,
    performance: Arc<RwLock<HashMap<Uuid, CarPerformance>>>,
}

impl MockAnalyticsRepository {
    /// Create a new mock with empty results everywhere
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_rental_statistics(&self, stats: Vec<RentalStatistics>) {
        *self.rental_stats.write().await = stats;
    }

    pub async fn set_history(&self, user_id: Uuid, entries: Vec<RentalHistoryEntry>) {
        self.history.write().await.insert(user_id, entries);
    }

    pub async fn set_availability(&self, car_id: Uuid, availability: CarAvailability) {
        self.availability.write().await.insert(car_id, availability);
    }

    pub async fn set_categories(&self, categories: Vec<CategoryPopularity>) {
        *self.categories.write().await = categories;
    }

    pub async fn set_review_stats(&self, user_id: Uuid, stats: UserReviewStats) {
        self.review_stats.write().await.insert(user_id, stats);
    }

    pub async fn set_performance(&self, car_id: Uuid, performance: CarPerformance) {
        self.performance.write().await.insert(car_id, performance);
    }
}

#[async_trait]
impl AnalyticsRepository for MockAnalyticsRepository {
    async fn rental_statistics(
        &self,
        _range: DateRange,
        _category: Option<&str>,
    ) -> Result<Vec<RentalStatistics>, DomainError> {
        Ok(self.rental_stats.read().await.clone())
    }

    async fn user_rental_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RentalHistoryEntry>, DomainError> {
        let history = self.history.read().await;
        Ok(history.get(&user_id).cloned().unwrap_or_default())
    }

    async fn car_availability(
        &self,
        car_id: Uuid,
        _range: DateRange,
    ) -> Result<CarAvailability, DomainError> {
        let availability = self.availability.read().await;
        Ok(availability
            .get(&car_id)
            .cloned()
            .unwrap_or_else(CarAvailability::empty))
    }

    async fn category_popularity(&self) -> Result<Vec<CategoryPopularity>, DomainError> {
        Ok(self.categories.read().await.clone())
    }

    async fn user_review_stats(&self, user_id: Uuid) -> Result<UserReviewStats, DomainError> {
        let stats = self.review_stats.read().await;
        Ok(stats
            .get(&user_id)
            .cloned()
            .unwrap_or_else(UserReviewStats::empty))
    }

    async fn car_performance(&self, car_id: Uuid) -> Result<CarPerformance, DomainError> {
        let performance = self.performance.read().await;
        Ok(performance.get(&car_id).cloned().unwrap_or(CarPerformance {
            total_rentals: 0,
            total_revenue: 0.0,
            average_rating: 0.0,
            utilization_rate: 0.0,
        }))
    }
}
