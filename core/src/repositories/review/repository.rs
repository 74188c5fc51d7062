//! Review repository trait defining the interface for review persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

/// Optional narrowing criteria for review listings
///
/// All fields combine with AND; a default filter matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub car_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub rating: Option<i32>,
}

impl ReviewFilter {
    /// Filter matching every review
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter scoped to one car
    pub fn for_car(car_id: Uuid) -> Self {
        Self {
            car_id: Some(car_id),
            ..Self::default()
        }
    }

    /// Filter scoped to one user
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }
}

/// Repository trait for Review entity persistence operations
///
/// The (user_id, rental_id) pair is unique; `exists_for_rental` lets the
/// service surface the duplicate error before hitting the index.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a new review
    ///
    /// # Returns
    /// * `Ok(Review)` - The created review
    /// * `Err(DomainError::Duplicate)` - The user already reviewed this rental
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// Find a review by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// List reviews matching a filter
    ///
    /// # Returns
    /// * Matching reviews ordered by review_date descending
    async fn find_filtered(&self, filter: ReviewFilter) -> Result<Vec<Review>, DomainError>;

    /// Check whether a user has already reviewed a rental
    async fn exists_for_rental(
        &self,
        user_id: Uuid,
        rental_id: Uuid,
    ) -> Result<bool, DomainError>;

    /// Update an existing review
    ///
    /// # Returns
    /// * `Ok(Review)` - The updated review
    /// * `Err(DomainError::NotFound)` - No review with given ID
    async fn update(&self, review: Review) -> Result<Review, DomainError>;

    /// Delete a review
    ///
    /// # Returns
    /// * `Ok(true)` - Review was deleted
    /// * `Ok(false)` - Review not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
