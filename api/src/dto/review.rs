//! DTOs for the review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use de_core::domain::entities::review::Review;
use de_core::services::{NewReview, ReviewUpdate};

/// Review submission as it arrives off the wire
///
/// Ids stay strings here; the review service parses and validates them so
/// a malformed id gets the contract message instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateReviewRequest {
    pub rental_id: String,
    pub car_id: String,
    pub rating: Option<i32>,
    pub title: String,
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            rental_id: request.rental_id,
            car_id: request.car_id,
            rating: request.rating,
            title: request.title,
            comment: request.comment,
        }
    }
}

/// Editable review fields; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for ReviewUpdate {
    fn from(request: UpdateReviewRequest) -> Self {
        ReviewUpdate {
            rating: request.rating,
            title: request.title,
            comment: request.comment,
        }
    }
}

/// Query parameters accepted by the public review listing
///
/// Ids and rating arrive as strings and are parsed in the handler so that
/// malformed values produce envelope errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsQuery {
    pub car_id: Option<String>,
    pub user_id: Option<String>,
    pub rating: Option<String>,
}

/// Stored review as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rental_id: Uuid,
    pub car_id: Uuid,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub review_date: DateTime<Utc>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            rental_id: review.rental_id,
            car_id: review.car_id,
            rating: review.rating,
            title: review.title,
            comment: review.comment,
            review_date: review.review_date,
            is_verified: review.is_verified,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
