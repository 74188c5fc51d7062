//! DTOs for the rental booking endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use de_core::domain::entities::rental::Rental;
use de_core::services::BookingRequest;

/// Booking fields as submitted by the client
///
/// All fields are defaulted at the serde level; the booking validator is
/// the one that reports which required field is missing, in its fixed rule
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRentalRequest {
    pub car_id: String,
    pub car_name: String,
    pub price_per_day: f64,
    /// Client-computed total, stored verbatim
    pub total_price: f64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_date: String,
    pub return_date: String,
    pub pickup_location: String,
    pub return_location: String,
    pub additional_drivers: Option<i32>,
    pub insurance: bool,
    pub special_requests: Option<String>,
}

impl From<CreateRentalRequest> for BookingRequest {
    fn from(request: CreateRentalRequest) -> Self {
        BookingRequest {
            car_id: request.car_id,
            car_name: request.car_name,
            price_per_day: request.price_per_day,
            total_price: request.total_price,
            name: request.name,
            email: request.email,
            phone: request.phone,
            pickup_date: request.pickup_date,
            return_date: request.return_date,
            pickup_location: request.pickup_location,
            return_location: request.return_location,
            additional_drivers: request.additional_drivers,
            insurance: request.insurance,
            special_requests: request.special_requests,
        }
    }
}

/// Stored rental as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub car_name: String,
    pub price_per_day: f64,
    pub total_price: f64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: String,
    pub return_location: String,
    pub additional_drivers: i32,
    pub insurance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            car_id: rental.car_id,
            car_name: rental.car_name,
            price_per_day: rental.price_per_day,
            total_price: rental.total_price,
            name: rental.name,
            email: rental.email,
            phone: rental.phone,
            pickup_date: rental.pickup_date,
            return_date: rental.return_date,
            pickup_location: rental.pickup_location,
            return_location: rental.return_location,
            additional_drivers: rental.additional_drivers,
            insurance: rental.insurance,
            special_requests: rental.special_requests,
            user_id: rental.user_id,
            created_at: rental.created_at,
        }
    }
}
