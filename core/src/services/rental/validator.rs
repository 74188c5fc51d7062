//! Booking validation rule chain
//!
//! Incoming bookings pass through a fixed sequence of checks; the first
//! failing rule wins and its message is returned verbatim to the client.
//! The chain is a pure function of the request and the supplied "today",
//! which keeps every rule independently testable.

use chrono::NaiveDate;

use de_shared::utils::validation::{is_non_empty, is_valid_email, is_valid_phone, parse_date};

use crate::domain::entities::rental::MAX_ADDITIONAL_DRIVERS;
use crate::errors::BookingError;

/// Raw booking fields as they arrive off the wire, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingRequest {
    pub car_id: String,
    pub car_name: String,
    pub price_per_day: f64,
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

/// The parsed and normalized outcome of a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidBooking {
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub additional_drivers: i32,
}

/// Runs the booking rule chain
///
/// Rules, in order, first failure wins:
/// 1. Required fields present (car, customer, dates, locations)
/// 2. Email format
/// 3. Phone format
/// 4. Dates parse as `YYYY-MM-DD`
/// 5. Pickup not in the past relative to `today`
/// 6. Return strictly after pickup
/// 7. Additional drivers within 0..=3 when supplied
pub fn validate_booking(
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<ValidBooking, BookingError> {
    let required: [(&str, &str, &str); 9] = [
        ("carId", &request.car_id, "Car ID is required"),
        ("carName", &request.car_name, "Car Name is required"),
        ("name", &request.name, "Customer Name is required"),
        ("email", &request.email, "Email is required"),
        ("phone", &request.phone, "Phone Number is required"),
        ("pickupDate", &request.pickup_date, "Pickup Date is required"),
        ("returnDate", &request.return_date, "Return Date is required"),
        (
            "pickupLocation",
            &request.pickup_location,
            "Pickup Location is required",
        ),
        (
            "returnLocation",
            &request.return_location,
            "Return Location is required",
        ),
    ];

    for (field, value, message) in required {
        if !is_non_empty(value) {
            return Err(BookingError::new(field, message));
        }
    }

    if !is_valid_email(&request.email) {
        return Err(BookingError::new("email", "Invalid email format"));
    }

    if !is_valid_phone(&request.phone) {
        return Err(BookingError::new("phone", "Invalid phone number format"));
    }

    let pickup_date = parse_date(&request.pickup_date)
        .ok_or_else(|| BookingError::new("pickupDate", "Invalid date format"))?;
    let return_date = parse_date(&request.return_date)
        .ok_or_else(|| BookingError::new("returnDate", "Invalid date format"))?;

    if pickup_date < today {
        return Err(BookingError::new(
            "pickupDate",
            "Pickup date cannot be in the past",
        ));
    }

    if return_date <= pickup_date {
        return Err(BookingError::new(
            "returnDate",
            "Return date must be after pickup date",
        ));
    }

    let additional_drivers = request.additional_drivers.unwrap_or(0);
    if !(0..=MAX_ADDITIONAL_DRIVERS).contains(&additional_drivers) {
        return Err(BookingError::new(
            "additionalDrivers",
            "Additional drivers must be between 0 and 3",
        ));
    }

    Ok(ValidBooking {
        pickup_date,
        return_date,
        additional_drivers,
    })
}
