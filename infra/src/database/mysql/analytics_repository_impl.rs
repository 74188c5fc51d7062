//! MySQL implementation of the AnalyticsRepository trait.
//!
//! The reporting aggregations run as single SQL statements over the rental,
//! car, and review tables. Integer aggregates are cast to SIGNED and averages
//! to DOUBLE so the rows decode into plain i64/f64 without decimal support.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use de_shared::types::DateRange;

use de_core::domain::value_objects::reports::{
    CarAvailability, CarPerformance, CategoryPopularity, HistoryCarDetails, HistoryReview,
    RatingEntry, RentalHistoryEntry, RentalStatistics, UserReviewStats,
};
use de_core::errors::DomainError;
use de_core::repositories::AnalyticsRepository;

/// MySQL implementation of AnalyticsRepository
pub struct MySqlAnalyticsRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAnalyticsRepository {
    /// Create a new MySQL analytics repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn get<'r, T>(row: &'r sqlx::mysql::MySqlRow, column: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(column)
            .map_err(|e| DomainError::Database(format!("Failed to get {}: {}", column, e)))
    }

    fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(raw).map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))
    }
}

#[async_trait]
impl AnalyticsRepository for MySqlAnalyticsRepository {
    async fn rental_statistics(
        &self,
        range: DateRange,
        category: Option<&str>,
    ) -> Result<Vec<RentalStatistics>, DomainError> {
        // The category filter applies to the joined car's category
        let query = match category {
            Some(_) => {
                r#"
                SELECT r.car_id, r.car_name, c.category,
                       COUNT(*) AS total_rentals,
                       SUM(r.total_price) AS total_revenue,
                       CAST(AVG(DATEDIFF(r.return_date, r.pickup_date)) AS DOUBLE)
                           AS average_rental_duration
                FROM rentals r
                INNER JOIN cars c ON c.id = r.car_id
                WHERE r.pickup_date >= ? AND r.pickup_date <= ? AND c.category = ?
                GROUP BY r.car_id, r.car_name, c.category
                ORDER BY total_revenue DESC
                "#
            }
            None => {
                r#"
                SELECT r.car_id, r.car_name, c.category,
                       COUNT(*) AS total_rentals,
                       SUM(r.total_price) AS total_revenue,
                       CAST(AVG(DATEDIFF(r.return_date, r.pickup_date)) AS DOUBLE)
                           AS average_rental_duration
                FROM rentals r
                INNER JOIN cars c ON c.id = r.car_id
                WHERE r.pickup_date >= ? AND r.pickup_date <= ?
                GROUP BY r.car_id, r.car_name, c.category
                ORDER BY total_revenue DESC
                "#
            }
        };

        let mut q = sqlx::query(query).bind(range.start).bind(range.end);
        if let Some(category) = category {
            q = q.bind(category);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Rental statistics query failed: {}", e)))?;

        rows.iter()
            .map(|row| {
                let car_id: String = Self::get(row, "car_id")?;
                Ok(RentalStatistics {
                    car_id: Self::parse_uuid(&car_id)?,
                    car_name: Self::get(row, "car_name")?,
                    category: Self::get(row, "category")?,
                    total_rentals: Self::get(row, "total_rentals")?,
                    total_revenue: Self::get(row, "total_revenue")?,
                    average_rental_duration: Self::get(row, "average_rental_duration")?,
                })
            })
            .collect()
    }

    async fn user_rental_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RentalHistoryEntry>, DomainError> {
        // Left joins keep rentals whose car was deleted or that have no review
        let query = r#"
            SELECT r.id AS rental_id, r.car_name, r.pickup_date, r.return_date,
                   r.total_price,
                   COALESCE(c.category, '') AS category,
                   COALESCE(c.features, '[]') AS features,
                   COALESCE(c.image_url, '') AS image_url,
                   v.rating AS review_rating,
                   v.comment AS review_comment,
                   v.review_date AS review_date
            FROM rentals r
            LEFT JOIN cars c ON c.id = r.car_id
            LEFT JOIN reviews v ON v.rental_id = r.id
            WHERE r.user_id = ?
            ORDER BY r.pickup_date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Rental history query failed: {}", e)))?;

        rows.iter()
            .map(|row| {
                let rental_id: String = Self::get(row, "rental_id")?;
                let features_json: String = Self::get(row, "features")?;
                let features: Vec<String> = serde_json::from_str(&features_json)
                    .map_err(|e| DomainError::Database(format!("Invalid features JSON: {}", e)))?;

                let review_rating: Option<i32> = Self::get(row, "review_rating")?;
                let review = match review_rating {
                    Some(rating) => Some(HistoryReview {
                        rating,
                        comment: Self::get::<Option<String>>(row, "review_comment")?
                            .unwrap_or_default(),
                        review_date: Self::get::<Option<DateTime<Utc>>>(row, "review_date")?
                            .unwrap_or_else(Utc::now),
                    }),
                    None => None,
                };

                Ok(RentalHistoryEntry {
                    rental_id: Self::parse_uuid(&rental_id)?,
                    car_name: Self::get(row, "car_name")?,
                    pickup_date: Self::get::<NaiveDate>(row, "pickup_date")?,
                    return_date: Self::get::<NaiveDate>(row, "return_date")?,
                    total_price: Self::get(row, "total_price")?,
                    car_details: HistoryCarDetails {
                        category: Self::get(row, "category")?,
                        features,
                        image_url: Self::get(row, "image_url")?,
                    },
                    review,
                })
            })
            .collect()
    }

    async fn car_availability(
        &self,
        car_id: Uuid,
        range: DateRange,
    ) -> Result<CarAvailability, DomainError> {
        // Overlap test: pickup <= window end AND return >= window start
        let query = r#"
            SELECT COUNT(*) AS total_rentals,
                   CAST(COALESCE(SUM(DATEDIFF(return_date, pickup_date)), 0) AS SIGNED)
                       AS total_days,
                   CAST(COALESCE(AVG(DATEDIFF(return_date, pickup_date)), 0) AS DOUBLE)
                       AS average_rental_duration
            FROM rentals
            WHERE car_id = ? AND pickup_date <= ? AND return_date >= ?
        "#;

        let row = sqlx::query(query)
            .bind(car_id.to_string())
            .bind(range.end)
            .bind(range.start)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Availability query failed: {}", e)))?;

        Ok(CarAvailability {
            total_rentals: Self::get(&row, "total_rentals")?,
            total_days: Self::get(&row, "total_days")?,
            average_rental_duration: Self::get(&row, "average_rental_duration")?,
        })
    }

    async fn category_popularity(&self) -> Result<Vec<CategoryPopularity>, DomainError> {
        // Rentals are pre-counted per car so the join cannot skew the
        // per-category price average
        let query = r#"
            SELECT c.category,
                   COUNT(*) AS total_cars,
                   CAST(COALESCE(SUM(rc.rental_count), 0) AS SIGNED) AS total_rentals,
                   AVG(c.price_per_day) AS average_price
            FROM cars c
            LEFT JOIN (
                SELECT car_id, COUNT(*) AS rental_count
                FROM rentals
                GROUP BY car_id
            ) rc ON rc.car_id = c.id
            GROUP BY c.category
            ORDER BY total_rentals DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::Database(format!("Category popularity query failed: {}", e))
            })?;

        rows.iter()
            .map(|row| {
                Ok(CategoryPopularity {
                    category: Self::get(row, "category")?,
                    total_cars: Self::get(row, "total_cars")?,
                    total_rentals: Self::get(row, "total_rentals")?,
                    average_price: Self::get(row, "average_price")?,
                })
            })
            .collect()
    }

    async fn user_review_stats(&self, user_id: Uuid) -> Result<UserReviewStats, DomainError> {
        let query = r#"
            SELECT rating, title, car_id
            FROM reviews
            WHERE user_id = ?
            ORDER BY review_date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Review stats query failed: {}", e)))?;

        let mut rating_distribution = Vec::with_capacity(rows.len());
        let mut rating_sum: i64 = 0;
        for row in &rows {
            let car_id: String = Self::get(row, "car_id")?;
            let rating: i32 = Self::get(row, "rating")?;
            rating_sum += i64::from(rating);
            rating_distribution.push(RatingEntry {
                rating,
                title: Self::get(row, "title")?,
                car_id: Self::parse_uuid(&car_id)?,
            });
        }

        let total_reviews = rating_distribution.len() as i64;
        let average_rating = if total_reviews == 0 {
            0.0
        } else {
            rating_sum as f64 / total_reviews as f64
        };

        Ok(UserReviewStats {
            total_reviews,
            average_rating,
            rating_distribution,
        })
    }

    async fn car_performance(&self, car_id: Uuid) -> Result<CarPerformance, DomainError> {
        // A rental has at most one review, so the join cannot fan out
        let query = r#"
            SELECT COUNT(*) AS total_rentals,
                   COALESCE(SUM(r.total_price), 0) AS total_revenue,
                   CAST(COALESCE(AVG(v.rating), 0) AS DOUBLE) AS average_rating,
                   CAST(COALESCE(AVG(
                       CASE WHEN r.pickup_date <= CURDATE() AND r.return_date >= CURDATE()
                            THEN 1 ELSE 0 END
                   ), 0) AS DOUBLE) AS utilization_rate
            FROM rentals r
            LEFT JOIN reviews v ON v.rental_id = r.id
            WHERE r.car_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(car_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Performance query failed: {}", e)))?;

        Ok(CarPerformance {
            total_rentals: Self::get(&row, "total_rentals")?,
            total_revenue: Self::get(&row, "total_revenue")?,
            average_rating: Self::get(&row, "average_rating")?,
            utilization_rate: Self::get(&row, "utilization_rate")?,
        })
    }
}
