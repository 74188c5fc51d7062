//! MySQL implementation of the ReviewRepository trait.
//!
//! Review persistence with SQLx. The unique composite index on
//! (user_id, rental_id) backs the one-review-per-rental rule.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use de_core::domain::entities::review::Review;
use de_core::errors::DomainError;
use de_core::repositories::review::ReviewFilter;
use de_core::repositories::ReviewRepository;

const REVIEW_COLUMNS: &str = r#"
    id, user_id, rental_id, car_id, rating, title, comment,
    review_date, is_verified, created_at, updated_at
"#;

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    /// Create a new MySQL review repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Review entity
    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> Result<Review, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::Database(format!("Failed to get user_id: {}", e)))?;
        let rental_id: String = row
            .try_get("rental_id")
            .map_err(|e| DomainError::Database(format!("Failed to get rental_id: {}", e)))?;
        let car_id: String = row
            .try_get("car_id")
            .map_err(|e| DomainError::Database(format!("Failed to get car_id: {}", e)))?;

        Ok(Review {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Database(format!("Invalid user UUID: {}", e)))?,
            rental_id: Uuid::parse_str(&rental_id)
                .map_err(|e| DomainError::Database(format!("Invalid rental UUID: {}", e)))?,
            car_id: Uuid::parse_str(&car_id)
                .map_err(|e| DomainError::Database(format!("Invalid car UUID: {}", e)))?,
            rating: row
                .try_get("rating")
                .map_err(|e| DomainError::Database(format!("Failed to get rating: {}", e)))?,
            title: row
                .try_get("title")
                .map_err(|e| DomainError::Database(format!("Failed to get title: {}", e)))?,
            comment: row
                .try_get("comment")
                .map_err(|e| DomainError::Database(format!("Failed to get comment: {}", e)))?,
            review_date: row
                .try_get::<DateTime<Utc>, _>("review_date")
                .map_err(|e| DomainError::Database(format!("Failed to get review_date: {}", e)))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database(format!("Failed to get is_verified: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (
                id, user_id, rental_id, car_id, rating, title, comment,
                review_date, is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.user_id.to_string())
            .bind(review.rental_id.to_string())
            .bind(review.car_id.to_string())
            .bind(review.rating)
            .bind(&review.title)
            .bind(&review.comment)
            .bind(review.review_date)
            .bind(review.is_verified)
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                // The composite (user_id, rental_id) unique index
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::duplicate("You have already reviewed this rental")
                }
                other => DomainError::Database(format!("Failed to create review: {}", other)),
            })?;

        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews WHERE id = ? LIMIT 1", REVIEW_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_review(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_filtered(&self, filter: ReviewFilter) -> Result<Vec<Review>, DomainError> {
        let mut conditions = Vec::new();
        if filter.car_id.is_some() {
            conditions.push("car_id = ?");
        }
        if filter.user_id.is_some() {
            conditions.push("user_id = ?");
        }
        if filter.rating.is_some() {
            conditions.push("rating = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {} FROM reviews {} ORDER BY review_date DESC",
            REVIEW_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        if let Some(car_id) = filter.car_id {
            q = q.bind(car_id.to_string());
        }
        if let Some(user_id) = filter.user_id {
            q = q.bind(user_id.to_string());
        }
        if let Some(rating) = filter.rating {
            q = q.bind(rating);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn exists_for_rental(
        &self,
        user_id: Uuid,
        rental_id: Uuid,
    ) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM reviews
                WHERE user_id = ? AND rental_id = ?
            ) as review_exists
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(rental_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::Database(format!("Failed to check review existence: {}", e))
            })?;

        let exists: i8 = result
            .try_get("review_exists")
            .map_err(|e| DomainError::Database(format!("Failed to get existence result: {}", e)))?;

        Ok(exists == 1)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            UPDATE reviews SET
                rating = ?,
                title = ?,
                comment = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(review.rating)
            .bind(&review.title)
            .bind(&review.comment)
            .bind(review.updated_at)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update review: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Review"));
        }

        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM reviews WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete review: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
