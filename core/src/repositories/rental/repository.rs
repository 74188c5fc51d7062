//! Rental repository trait defining the interface for booking persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::errors::DomainError;

/// Repository trait for Rental entity persistence operations
///
/// Overlapping bookings for the same car are accepted; no implementation
/// adds an exclusion check.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Persist a new rental
    ///
    /// # Returns
    /// * `Ok(Rental)` - The created rental
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError>;

    /// Find a rental by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Rental))` - Rental found
    /// * `Ok(None)` - No rental with given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError>;

    /// List every rental in the system
    ///
    /// # Returns
    /// * All rentals ordered by created_at descending
    async fn find_all(&self) -> Result<Vec<Rental>, DomainError>;

    /// List rentals belonging to one user
    ///
    /// # Arguments
    /// * `user_id` - The owning user
    ///
    /// # Returns
    /// * The user's rentals ordered by created_at descending
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Rental>, DomainError>;

    /// Delete a rental
    ///
    /// # Returns
    /// * `Ok(true)` - Rental was deleted
    /// * `Ok(false)` - Rental not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
