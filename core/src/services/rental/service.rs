//! Main rental service implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RentalRepository;

use super::validator::{validate_booking, BookingRequest};

/// Rental service for the booking workflow
///
/// Ownership lives here, not in the store: a rental is always bound to the
/// authenticated caller, and the admin-only listings and deletions check the
/// caller's role before touching the repository.
pub struct RentalService<R: RentalRepository> {
    /// Rental repository for database operations
    rental_repository: Arc<R>,
}

impl<R: RentalRepository> RentalService<R> {
    /// Create a new rental service
    pub fn new(rental_repository: Arc<R>) -> Self {
        Self { rental_repository }
    }

    /// Book a car for the caller
    ///
    /// Runs the full validation rule chain, then persists the rental bound
    /// to the caller's user id. The total price is stored exactly as
    /// supplied; the server never recomputes it. Overlapping bookings for
    /// the same car are not rejected.
    ///
    /// # Arguments
    ///
    /// * `caller` - The authenticated caller, becomes the rental's owner
    /// * `request` - Raw booking fields off the wire
    ///
    /// # Returns
    ///
    /// * `Ok(Rental)` - The persisted rental record
    /// * `Err(DomainError)` - A validation rule failed or persistence failed
    pub async fn create(&self, caller: &Caller, request: BookingRequest) -> DomainResult<Rental> {
        let today = Utc::now().date_naive();
        let valid = validate_booking(&request, today)?;

        let car_id = Uuid::parse_str(request.car_id.trim())
            .map_err(|_| DomainError::validation("carId", "Invalid car ID"))?;

        let rental = Rental {
            id: Uuid::new_v4(),
            car_id,
            car_name: request.car_name,
            price_per_day: request.price_per_day,
            total_price: request.total_price,
            name: request.name,
            email: request.email,
            phone: request.phone,
            pickup_date: valid.pickup_date,
            return_date: valid.return_date,
            pickup_location: request.pickup_location,
            return_location: request.return_location,
            additional_drivers: valid.additional_drivers,
            insurance: request.insurance,
            special_requests: request.special_requests,
            user_id: caller.user_id,
            created_at: Utc::now(),
        };

        let created = self.rental_repository.create(rental).await?;

        tracing::info!(
            rental_id = %created.id,
            user_id = %caller.user_id,
            car_id = %created.car_id,
            event = "rental_created",
            "Rental booked"
        );

        Ok(created)
    }

    /// List every rental in the system, newest first
    ///
    /// Admin only.
    pub async fn list_all(&self, caller: &Caller) -> DomainResult<Vec<Rental>> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        self.rental_repository.find_all().await
    }

    /// List the caller's own rentals, newest first
    pub async fn list_own(&self, caller: &Caller) -> DomainResult<Vec<Rental>> {
        self.rental_repository.find_by_user(caller.user_id).await
    }

    /// Delete a rental
    ///
    /// Admin only; missing rentals surface as `NotFound`.
    pub async fn delete(&self, caller: &Caller, id: Uuid) -> DomainResult<()> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        if !self.rental_repository.delete(id).await? {
            return Err(DomainError::not_found("Rental"));
        }

        tracing::info!(rental_id = %id, event = "rental_deleted", "Rental deleted");

        Ok(())
    }
}
