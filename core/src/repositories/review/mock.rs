//! Mock implementation of ReviewRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

use super::repository::{ReviewFilter, ReviewRepository};

/// Mock review repository for testing
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the mock with an existing review
    pub async fn insert(&self, review: Review) {
        self.reviews.write().await.insert(review.id, review);
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if reviews
            .values()
            .any(|r| r.user_id == review.user_id && r.rental_id == review.rental_id)
        {
            return Err(DomainError::duplicate(
                "You have already reviewed this rental",
            ));
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn find_filtered(&self, filter: ReviewFilter) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut matched: Vec<Review> = reviews
            .values()
            .filter(|r| filter.car_id.map_or(true, |id| r.car_id == id))
            .filter(|r| filter.user_id.map_or(true, |id| r.user_id == id))
            .filter(|r| filter.rating.map_or(true, |rating| r.rating == rating))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.review_date.cmp(&a.review_date));
        Ok(matched)
    }

    async fn exists_for_rental(
        &self,
        user_id: Uuid,
        rental_id: Uuid,
    ) -> Result<bool, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .any(|r| r.user_id == user_id && r.rental_id == rental_id))
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if !reviews.contains_key(&review.id) {
            return Err(DomainError::not_found("Review"));
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews.remove(&id).is_some())
    }
}
