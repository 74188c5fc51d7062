//! Car repository trait defining the interface for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::car::{Car, CarStatus};
use crate::errors::DomainError;

/// Repository trait for Car entity persistence operations
///
/// The catalog is read publicly and mutated by administrators; both paths go
/// through this trait.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// List cars, optionally narrowed by category and status
    ///
    /// # Arguments
    /// * `category` - Optional category filter, matched exactly
    /// * `status` - Optional status filter
    ///
    /// # Returns
    /// * Matching cars ordered by created_at descending
    async fn find_filtered(
        &self,
        category: Option<&str>,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, DomainError>;

    /// Find a car by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Car))` - Car found
    /// * `Ok(None)` - No car with given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError>;

    /// Persist a new car
    ///
    /// # Returns
    /// * `Ok(Car)` - The created car
    async fn create(&self, car: Car) -> Result<Car, DomainError>;

    /// Update an existing car
    ///
    /// # Returns
    /// * `Ok(Car)` - The updated car
    /// * `Err(DomainError::NotFound)` - No car with given ID
    async fn update(&self, car: Car) -> Result<Car, DomainError>;

    /// Delete a car
    ///
    /// # Returns
    /// * `Ok(true)` - Car was deleted
    /// * `Ok(false)` - Car not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
