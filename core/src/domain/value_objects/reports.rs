//! Read-model types produced by the reporting aggregations.
//!
//! These are serialized straight onto the wire with camelCase keys, so the
//! field names here define the public analytics contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-car rental totals over a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalStatistics {
    pub car_id: Uuid,
    pub car_name: String,
    pub category: String,
    pub total_rentals: i64,
    pub total_revenue: f64,
    /// Mean rental length in days
    pub average_rental_duration: f64,
}

/// Car details embedded in a rental history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCarDetails {
    pub category: String,
    pub features: Vec<String>,
    pub image_url: String,
}

/// Review details embedded in a rental history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReview {
    pub rating: i32,
    pub comment: String,
    pub review_date: DateTime<Utc>,
}

/// One rental in a user's history, joined with its car and review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalHistoryEntry {
    pub rental_id: Uuid,
    pub car_name: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub total_price: f64,
    pub car_details: HistoryCarDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<HistoryReview>,
}

/// Rental pressure on one car over a date window
///
/// A window with no overlapping rentals yields all zeroes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarAvailability {
    pub total_rentals: i64,
    pub total_days: i64,
    pub average_rental_duration: f64,
}

impl CarAvailability {
    /// The empty-window result
    pub fn empty() -> Self {
        Self {
            total_rentals: 0,
            total_days: 0,
            average_rental_duration: 0.0,
        }
    }
}

/// Fleet size and demand per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPopularity {
    pub category: String,
    pub total_cars: i64,
    pub total_rentals: i64,
    pub average_price: f64,
}

/// One rating in a user's review distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub rating: i32,
    pub title: String,
    pub car_id: Uuid,
}

/// Aggregate review activity for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewStats {
    pub total_reviews: i64,
    pub average_rating: f64,
    pub rating_distribution: Vec<RatingEntry>,
}

impl UserReviewStats {
    /// Stats for a user with no reviews
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            rating_distribution: Vec::new(),
        }
    }
}

/// Revenue, ratings, and utilization for one car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPerformance {
    pub total_rentals: i64,
    pub total_revenue: f64,
    pub average_rating: f64,
    /// Fraction of the car's rentals whose date window contains today
    pub utilization_rate: f64,
}
