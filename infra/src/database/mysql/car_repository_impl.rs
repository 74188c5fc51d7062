//! MySQL implementation of the CarRepository trait.
//!
//! Catalog persistence with SQLx. The features list is stored as JSON text in
//! a single column; embedded image payloads live in a LONGTEXT column.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use de_core::domain::entities::car::{Car, CarStatus};
use de_core::errors::DomainError;
use de_core::repositories::CarRepository;

const CAR_COLUMNS: &str = r#"
    id, name, car_type, category, price_per_day, seats, status,
    features, range_estimate, description, year, mileage, license_plate,
    last_maintenance_date, image_url, image_data, created_at, updated_at
"#;

/// MySQL implementation of CarRepository
pub struct MySqlCarRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCarRepository {
    /// Create a new MySQL car repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Car entity
    fn row_to_car(row: &sqlx::mysql::MySqlRow) -> Result<Car, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;

        let status_str: String = row
            .try_get("status")
            .map_err(|e| DomainError::Database(format!("Failed to get status: {}", e)))?;
        let status: CarStatus = status_str
            .parse()
            .map_err(|e: String| DomainError::Database(e))?;

        let features_json: String = row
            .try_get("features")
            .map_err(|e| DomainError::Database(format!("Failed to get features: {}", e)))?;
        let features: Vec<String> = serde_json::from_str(&features_json)
            .map_err(|e| DomainError::Database(format!("Invalid features JSON: {}", e)))?;

        Ok(Car {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            car_type: row
                .try_get("car_type")
                .map_err(|e| DomainError::Database(format!("Failed to get car_type: {}", e)))?,
            category: row
                .try_get("category")
                .map_err(|e| DomainError::Database(format!("Failed to get category: {}", e)))?,
            price_per_day: row
                .try_get("price_per_day")
                .map_err(|e| DomainError::Database(format!("Failed to get price_per_day: {}", e)))?,
            seats: row
                .try_get("seats")
                .map_err(|e| DomainError::Database(format!("Failed to get seats: {}", e)))?,
            status,
            features,
            range_estimate: row
                .try_get("range_estimate")
                .map_err(|e| DomainError::Database(format!("Failed to get range_estimate: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database(format!("Failed to get description: {}", e)))?,
            year: row
                .try_get("year")
                .map_err(|e| DomainError::Database(format!("Failed to get year: {}", e)))?,
            mileage: row
                .try_get("mileage")
                .map_err(|e| DomainError::Database(format!("Failed to get mileage: {}", e)))?,
            license_plate: row
                .try_get("license_plate")
                .map_err(|e| DomainError::Database(format!("Failed to get license_plate: {}", e)))?,
            last_maintenance_date: row
                .try_get::<NaiveDate, _>("last_maintenance_date")
                .map_err(|e| {
                    DomainError::Database(format!("Failed to get last_maintenance_date: {}", e))
                })?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| DomainError::Database(format!("Failed to get image_url: {}", e)))?,
            image_data: row
                .try_get("image_data")
                .map_err(|e| DomainError::Database(format!("Failed to get image_data: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn features_to_json(features: &[String]) -> Result<String, DomainError> {
        serde_json::to_string(features)
            .map_err(|e| DomainError::Database(format!("Failed to encode features: {}", e)))
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn find_filtered(
        &self,
        category: Option<&str>,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, DomainError> {
        // Build the WHERE clause from whichever filters are present
        let query = match (category, status) {
            (Some(_), Some(_)) => format!(
                "SELECT {} FROM cars WHERE category = ? AND status = ? ORDER BY created_at DESC",
                CAR_COLUMNS
            ),
            (Some(_), None) => format!(
                "SELECT {} FROM cars WHERE category = ? ORDER BY created_at DESC",
                CAR_COLUMNS
            ),
            (None, Some(_)) => format!(
                "SELECT {} FROM cars WHERE status = ? ORDER BY created_at DESC",
                CAR_COLUMNS
            ),
            (None, None) => format!("SELECT {} FROM cars ORDER BY created_at DESC", CAR_COLUMNS),
        };

        let mut q = sqlx::query(&query);
        if let Some(category) = category {
            q = q.bind(category);
        }
        if let Some(status) = status {
            q = q.bind(status.as_str());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_car).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError> {
        let query = format!("SELECT {} FROM cars WHERE id = ? LIMIT 1", CAR_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_car(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let query = r#"
            INSERT INTO cars (
                id, name, car_type, category, price_per_day, seats, status,
                features, range_estimate, description, year, mileage,
                license_plate, last_maintenance_date, image_url, image_data,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(car.id.to_string())
            .bind(&car.name)
            .bind(&car.car_type)
            .bind(&car.category)
            .bind(car.price_per_day)
            .bind(car.seats)
            .bind(car.status.as_str())
            .bind(Self::features_to_json(&car.features)?)
            .bind(&car.range_estimate)
            .bind(&car.description)
            .bind(car.year)
            .bind(car.mileage)
            .bind(&car.license_plate)
            .bind(car.last_maintenance_date)
            .bind(&car.image_url)
            .bind(car.image_data.as_deref())
            .bind(car.created_at)
            .bind(car.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create car: {}", e)))?;

        Ok(car)
    }

    async fn update(&self, car: Car) -> Result<Car, DomainError> {
        let query = r#"
            UPDATE cars SET
                name = ?,
                car_type = ?,
                category = ?,
                price_per_day = ?,
                seats = ?,
                status = ?,
                features = ?,
                range_estimate = ?,
                description = ?,
                year = ?,
                mileage = ?,
                license_plate = ?,
                last_maintenance_date = ?,
                image_url = ?,
                image_data = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&car.name)
            .bind(&car.car_type)
            .bind(&car.category)
            .bind(car.price_per_day)
            .bind(car.seats)
            .bind(car.status.as_str())
            .bind(Self::features_to_json(&car.features)?)
            .bind(&car.range_estimate)
            .bind(&car.description)
            .bind(car.year)
            .bind(car.mileage)
            .bind(&car.license_plate)
            .bind(car.last_maintenance_date)
            .bind(&car.image_url)
            .bind(car.image_data.as_deref())
            .bind(car.updated_at)
            .bind(car.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update car: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Car"));
        }

        Ok(car)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM cars WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete car: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
