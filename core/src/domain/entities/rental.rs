//! Rental entity representing a confirmed booking.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of additional drivers on a booking
pub const MAX_ADDITIONAL_DRIVERS: i32 = 3;

/// Rental entity representing a confirmed booking
///
/// Carries a snapshot of the car name and daily rate at booking time, so
/// later catalog edits do not rewrite history. The total price is whatever
/// the caller submitted; the workflow stores it as given and never
/// recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    /// Unique identifier for the rental
    pub id: Uuid,

    /// The booked car
    pub car_id: Uuid,

    /// Car name snapshot at booking time
    pub car_name: String,

    /// Daily rate snapshot at booking time
    pub price_per_day: f64,

    /// Total price as submitted by the caller
    pub total_price: f64,

    /// Renter's full name
    pub name: String,

    /// Renter's contact email
    pub email: String,

    /// Renter's contact phone
    pub phone: String,

    /// First day of the booking
    pub pickup_date: NaiveDate,

    /// Last day of the booking, strictly after pickup
    pub return_date: NaiveDate,

    /// Where the car is collected
    pub pickup_location: String,

    /// Where the car is dropped off
    pub return_location: String,

    /// Extra drivers on the contract, 0 to [`MAX_ADDITIONAL_DRIVERS`]
    pub additional_drivers: i32,

    /// Whether insurance cover was taken
    pub insurance: bool,

    /// Free-text requests from the renter
    pub special_requests: Option<String>,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Booking length in whole days (return is not counted as a rental day)
    pub fn duration_days(&self) -> i64 {
        (self.return_date - self.pickup_date).num_days()
    }

    /// Ownership check used by the workflow boundary
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Whether the booking window contains the given date
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.pickup_date <= date && date <= self.return_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rental() -> Rental {
        Rental {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            car_name: "Aston Martin DB11".to_string(),
            price_per_day: 75.0,
            total_price: 375.0,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555-123-4567".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            pickup_location: "Downtown".to_string(),
            return_location: "Airport".to_string(),
            additional_drivers: 1,
            insurance: true,
            special_requests: None,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_duration_days() {
        let rental = sample_rental();
        assert_eq!(rental.duration_days(), 3);
    }

    #[test]
    fn test_ownership_check() {
        let rental = sample_rental();
        assert!(rental.is_owned_by(rental.user_id));
        assert!(!rental.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_is_active_on() {
        let rental = sample_rental();
        assert!(rental.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(rental.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()));
        assert!(!rental.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()));
        assert!(!rental.is_active_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
    }
}
