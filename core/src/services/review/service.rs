//! Main review service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::review::{Review, MAX_RATING, MIN_COMMENT_LENGTH, MIN_RATING};
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::review::ReviewFilter;
use crate::repositories::{RentalRepository, ReviewRepository};

/// Raw review submission fields as they arrive off the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReview {
    pub rental_id: String,
    pub car_id: String,
    pub rating: Option<i32>,
    pub title: String,
    pub comment: String,
}

/// Editable review fields; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
}

/// Review service for submission, edits, and listings
///
/// A review is only accepted against a rental the caller owns, and a rental
/// can be reviewed once per user. Edits and deletion are allowed for the
/// review's owner or an administrator.
pub struct ReviewService<V: ReviewRepository, R: RentalRepository> {
    /// Review repository for database operations
    review_repository: Arc<V>,
    /// Rental repository for the ownership check on submission
    rental_repository: Arc<R>,
}

impl<V: ReviewRepository, R: RentalRepository> ReviewService<V, R> {
    /// Create a new review service
    pub fn new(review_repository: Arc<V>, rental_repository: Arc<R>) -> Self {
        Self {
            review_repository,
            rental_repository,
        }
    }

    /// Submit a review for a rental the caller owns
    ///
    /// Checks run in a fixed order: field validation first, then rental
    /// existence, then ownership, then the one-review-per-rental rule.
    /// The stored review is marked verified and dated now.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller, becomes the review's owner
    /// * `request` - Raw review fields off the wire
    ///
    /// # Returns
    ///
    /// * `Ok(Review)` - The persisted review
    /// * `Err(DomainError)` - A check failed; the message names the rule
    pub async fn create(&self, caller: &Caller, request: NewReview) -> DomainResult<Review> {
        let rating = Self::validate_fields(&request)?;

        let rental_id = Uuid::parse_str(request.rental_id.trim())
            .map_err(|_| DomainError::validation("rentalId", "Invalid rental ID"))?;
        let car_id = Uuid::parse_str(request.car_id.trim())
            .map_err(|_| DomainError::validation("carId", "Invalid car ID"))?;

        let rental = self
            .rental_repository
            .find_by_id(rental_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Rental"))?;

        if !rental.is_owned_by(caller.user_id) {
            return Err(DomainError::forbidden(
                "You can only review your own rentals",
            ));
        }

        if self
            .review_repository
            .exists_for_rental(caller.user_id, rental_id)
            .await?
        {
            return Err(DomainError::duplicate(
                "You have already reviewed this rental",
            ));
        }

        let review = Review::new(
            caller.user_id,
            rental_id,
            car_id,
            rating,
            request.title.trim(),
            request.comment.trim(),
        );
        let created = self.review_repository.create(review).await?;

        tracing::info!(
            review_id = %created.id,
            user_id = %caller.user_id,
            car_id = %created.car_id,
            rating = created.rating,
            event = "review_submitted",
            "New review submitted"
        );

        Ok(created)
    }

    /// Edit a review's rating, title, or comment
    ///
    /// Owner or admin only; the effective values are re-validated.
    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        update: ReviewUpdate,
    ) -> DomainResult<Review> {
        let mut review = self
            .review_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;

        if !review.is_owned_by(caller.user_id) && !caller.is_admin() {
            return Err(DomainError::forbidden(
                "You can only update your own reviews",
            ));
        }

        let rating = update.rating.unwrap_or(review.rating);
        let title = update.title.unwrap_or_else(|| review.title.clone());
        let comment = update.comment.unwrap_or_else(|| review.comment.clone());

        Self::validate_fields(&NewReview {
            rental_id: review.rental_id.to_string(),
            car_id: review.car_id.to_string(),
            rating: Some(rating),
            title: title.clone(),
            comment: comment.clone(),
        })?;

        review.apply_update(rating, title.trim(), comment.trim());
        let updated = self.review_repository.update(review).await?;

        tracing::info!(
            review_id = %updated.id,
            user_id = %caller.user_id,
            event = "review_updated",
            "Review updated"
        );

        Ok(updated)
    }

    /// Delete a review
    ///
    /// Owner or admin only.
    pub async fn delete(&self, caller: &Caller, id: Uuid) -> DomainResult<()> {
        let review = self
            .review_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))?;

        if !review.is_owned_by(caller.user_id) && !caller.is_admin() {
            return Err(DomainError::forbidden(
                "You can only delete your own reviews",
            ));
        }

        self.review_repository.delete(id).await?;

        tracing::info!(
            review_id = %id,
            user_id = %caller.user_id,
            is_admin = caller.is_admin(),
            event = "review_deleted",
            "Review deleted"
        );

        Ok(())
    }

    /// List reviews matching optional filters, newest first
    pub async fn list(&self, filter: ReviewFilter) -> DomainResult<Vec<Review>> {
        self.review_repository.find_filtered(filter).await
    }

    /// List reviews for one car, newest first
    pub async fn list_for_car(&self, car_id: Uuid) -> DomainResult<Vec<Review>> {
        self.review_repository
            .find_filtered(ReviewFilter::for_car(car_id))
            .await
    }

    /// List the caller's own reviews, newest first
    pub async fn list_own(&self, caller: &Caller) -> DomainResult<Vec<Review>> {
        self.review_repository
            .find_filtered(ReviewFilter::for_user(caller.user_id))
            .await
    }

    /// Ordered field checks shared by create and update
    ///
    /// Returns the validated rating.
    fn validate_fields(request: &NewReview) -> DomainResult<i32> {
        if request.rental_id.trim().is_empty() {
            return Err(DomainError::validation("rentalId", "Rental ID is required"));
        }

        if request.car_id.trim().is_empty() {
            return Err(DomainError::validation("carId", "Car ID is required"));
        }

        let rating = request
            .rating
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                DomainError::validation("rating", "Rating must be between 1 and 5")
            })?;

        if request.comment.trim().chars().count() < MIN_COMMENT_LENGTH {
            return Err(DomainError::validation(
                "comment",
                "Comment must be at least 3 characters",
            ));
        }

        if request.title.trim().is_empty() {
            return Err(DomainError::validation("title", "Review title is required"));
        }

        Ok(rating)
    }
}
