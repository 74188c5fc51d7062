//! MySQL implementation of the RentalRepository trait.
//!
//! Booking persistence with SQLx. Rentals are insert-once records; the only
//! mutation is deletion by an administrator.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use de_core::domain::entities::rental::Rental;
use de_core::errors::DomainError;
use de_core::repositories::RentalRepository;

const RENTAL_COLUMNS: &str = r#"
    id, car_id, car_name, price_per_day, total_price, name, email, phone,
    pickup_date, return_date, pickup_location, return_location,
    additional_drivers, insurance, special_requests, user_id, created_at
"#;

/// MySQL implementation of RentalRepository
pub struct MySqlRentalRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRentalRepository {
    /// Create a new MySQL rental repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Rental entity
    fn row_to_rental(row: &sqlx::mysql::MySqlRow) -> Result<Rental, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let car_id: String = row
            .try_get("car_id")
            .map_err(|e| DomainError::Database(format!("Failed to get car_id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::Database(format!("Failed to get user_id: {}", e)))?;

        Ok(Rental {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            car_id: Uuid::parse_str(&car_id)
                .map_err(|e| DomainError::Database(format!("Invalid car UUID: {}", e)))?,
            car_name: row
                .try_get("car_name")
                .map_err(|e| DomainError::Database(format!("Failed to get car_name: {}", e)))?,
            price_per_day: row
                .try_get("price_per_day")
                .map_err(|e| DomainError::Database(format!("Failed to get price_per_day: {}", e)))?,
            total_price: row
                .try_get("total_price")
                .map_err(|e| DomainError::Database(format!("Failed to get total_price: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::Database(format!("Failed to get phone: {}", e)))?,
            pickup_date: row
                .try_get::<NaiveDate, _>("pickup_date")
                .map_err(|e| DomainError::Database(format!("Failed to get pickup_date: {}", e)))?,
            return_date: row
                .try_get::<NaiveDate, _>("return_date")
                .map_err(|e| DomainError::Database(format!("Failed to get return_date: {}", e)))?,
            pickup_location: row.try_get("pickup_location").map_err(|e| {
                DomainError::Database(format!("Failed to get pickup_location: {}", e))
            })?,
            return_location: row.try_get("return_location").map_err(|e| {
                DomainError::Database(format!("Failed to get return_location: {}", e))
            })?,
            additional_drivers: row.try_get("additional_drivers").map_err(|e| {
                DomainError::Database(format!("Failed to get additional_drivers: {}", e))
            })?,
            insurance: row
                .try_get("insurance")
                .map_err(|e| DomainError::Database(format!("Failed to get insurance: {}", e)))?,
            special_requests: row.try_get("special_requests").map_err(|e| {
                DomainError::Database(format!("Failed to get special_requests: {}", e))
            })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Database(format!("Invalid user UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl RentalRepository for MySqlRentalRepository {
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError> {
        let query = r#"
            INSERT INTO rentals (
                id, car_id, car_name, price_per_day, total_price,
                name, email, phone, pickup_date, return_date,
                pickup_location, return_location, additional_drivers,
                insurance, special_requests, user_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(rental.id.to_string())
            .bind(rental.car_id.to_string())
            .bind(&rental.car_name)
            .bind(rental.price_per_day)
            .bind(rental.total_price)
            .bind(&rental.name)
            .bind(&rental.email)
            .bind(&rental.phone)
            .bind(rental.pickup_date)
            .bind(rental.return_date)
            .bind(&rental.pickup_location)
            .bind(&rental.return_location)
            .bind(rental.additional_drivers)
            .bind(rental.insurance)
            .bind(rental.special_requests.as_deref())
            .bind(rental.user_id.to_string())
            .bind(rental.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create rental: {}", e)))?;

        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError> {
        let query = format!("SELECT {} FROM rentals WHERE id = ? LIMIT 1", RENTAL_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_rental(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Rental>, DomainError> {
        let query = format!(
            "SELECT {} FROM rentals ORDER BY created_at DESC",
            RENTAL_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_rental).collect()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Rental>, DomainError> {
        let query = format!(
            "SELECT {} FROM rentals WHERE user_id = ? ORDER BY created_at DESC",
            RENTAL_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_rental).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM rentals WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete rental: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
