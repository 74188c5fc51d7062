//! Review entity representing feedback left after a rental.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// Minimum review comment length in characters
pub const MIN_COMMENT_LENGTH: usize = 3;

/// Review entity tied to one completed rental
///
/// A user may leave at most one review per rental; the (user, rental) pair
/// is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,

    /// The reviewing user
    pub user_id: Uuid,

    /// The rental being reviewed, owned by the reviewing user
    pub rental_id: Uuid,

    /// The car that rental was for
    pub car_id: Uuid,

    /// Rating between [`MIN_RATING`] and [`MAX_RATING`]
    pub rating: i32,

    /// Short headline
    pub title: String,

    /// Body text, at least [`MIN_COMMENT_LENGTH`] characters
    pub comment: String,

    /// When the review was written
    pub review_date: DateTime<Utc>,

    /// Set when the review is backed by a real rental record
    pub is_verified: bool,

    /// Timestamp when the review was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the review was last updated
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new verified review
    pub fn new(
        user_id: Uuid,
        rental_id: Uuid,
        car_id: Uuid,
        rating: i32,
        title: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            rental_id,
            car_id,
            rating,
            title: title.into(),
            comment: comment.into(),
            review_date: now,
            is_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an owner/admin edit; only rating, title, and comment change
    pub fn apply_update(&mut self, rating: i32, title: impl Into<String>, comment: impl Into<String>) {
        self.rating = rating;
        self.title = title.into();
        self.comment = comment.into();
        self.updated_at = Utc::now();
    }

    /// Ownership check used by the workflow boundary
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_review_is_verified() {
        let review = Review::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            5,
            "Fantastic",
            "Would rent again.",
        );

        assert!(review.is_verified);
        assert_eq!(review.rating, 5);
        assert_eq!(review.title, "Fantastic");
    }

    #[test]
    fn test_apply_update_only_touches_editable_fields() {
        let user_id = Uuid::new_v4();
        let rental_id = Uuid::new_v4();
        let mut review = Review::new(user_id, rental_id, Uuid::new_v4(), 4, "Good", "Solid car");
        let created = review.created_at;

        review.apply_update(2, "Changed my mind", "The AC broke down");

        assert_eq!(review.rating, 2);
        assert_eq!(review.comment, "The AC broke down");
        assert_eq!(review.user_id, user_id);
        assert_eq!(review.rental_id, rental_id);
        assert_eq!(review.created_at, created);
        assert!(review.updated_at >= created);
    }

    #[test]
    fn test_ownership_check() {
        let user_id = Uuid::new_v4();
        let review = Review::new(user_id, Uuid::new_v4(), Uuid::new_v4(), 3, "OK", "Average");
        assert!(review.is_owned_by(user_id));
        assert!(!review.is_owned_by(Uuid::new_v4()));
    }
}
