//! Car entity representing a rentable vehicle in the catalog.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of catalog categories
pub const CAR_CATEGORIES: &[&str] = &[
    "Luxury",
    "Sports",
    "SUV",
    "Sedan",
    "Muscle",
    "Supercar",
    "Hypercar",
    "Sport",
    "Ultra Luxury",
];

/// Minimum seat count for a car
pub const MIN_SEATS: i32 = 1;

/// Maximum seat count for a car
pub const MAX_SEATS: i32 = 10;

/// Checks a category string against the closed catalog list
pub fn is_valid_category(category: &str) -> bool {
    CAR_CATEGORIES.contains(&category)
}

/// Fleet status of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    /// Ready to be booked
    Available,
    /// Currently out with a renter
    Rented,
    /// Pulled from the fleet for servicing
    Maintenance,
    /// Held for an upcoming booking
    Reserved,
}

impl CarStatus {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "available",
            CarStatus::Rented => "rented",
            CarStatus::Maintenance => "maintenance",
            CarStatus::Reserved => "reserved",
        }
    }
}

impl std::str::FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(CarStatus::Available),
            "rented" => Ok(CarStatus::Rented),
            "maintenance" => Ok(CarStatus::Maintenance),
            "reserved" => Ok(CarStatus::Reserved),
            other => Err(format!("Invalid car status: {}", other)),
        }
    }
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Car entity representing a rentable vehicle
///
/// Invariant enforced before every save: the car carries at least one image
/// reference, either a URL or an embedded base64 payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier for the car
    pub id: Uuid,

    /// Display name (e.g. "Aston Martin DB11")
    pub name: String,

    /// Drivetrain/body description (e.g. "Coupe", "Automatic")
    pub car_type: String,

    /// Catalog category, one of [`CAR_CATEGORIES`]
    pub category: String,

    /// Rental price per day
    pub price_per_day: f64,

    /// Seat count, between [`MIN_SEATS`] and [`MAX_SEATS`]
    pub seats: i32,

    /// Fleet status
    pub status: CarStatus,

    /// Feature list shown on the detail page
    pub features: Vec<String>,

    /// Range or fuel estimate, free text
    pub range_estimate: String,

    /// Marketing description
    pub description: String,

    /// Model year
    pub year: i32,

    /// Odometer reading in kilometres
    pub mileage: i64,

    /// Fleet license plate
    pub license_plate: String,

    /// Date of the most recent maintenance
    pub last_maintenance_date: NaiveDate,

    /// Image URL reference
    pub image_url: String,

    /// Embedded base64 image payload
    pub image_data: Option<String>,

    /// Timestamp when the car was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the car was last updated
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Creates a new car with catalog defaults for the optional fields
    pub fn new(
        name: impl Into<String>,
        car_type: impl Into<String>,
        category: impl Into<String>,
        price_per_day: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            car_type: car_type.into(),
            category: category.into(),
            price_per_day,
            seats: 2,
            status: CarStatus::Available,
            features: Vec::new(),
            range_estimate: String::from("Not specified"),
            description: String::new(),
            year: now.year(),
            mileage: 0,
            license_plate: String::from("Not assigned"),
            last_maintenance_date: now.date_naive(),
            image_url: String::new(),
            image_data: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks the pre-save invariant: at least one image reference present
    pub fn has_image_reference(&self) -> bool {
        !self.image_url.trim().is_empty()
            || self
                .image_data
                .as_deref()
                .map(|d| !d.trim().is_empty())
                .unwrap_or(false)
    }

    /// Replaces the embedded image payload
    pub fn set_image_data(&mut self, image_data: String) {
        self.image_data = Some(image_data);
        self.updated_at = Utc::now();
    }

    /// Marks the entity as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_defaults() {
        let car = Car::new("Mustang GT", "Coupe", "Muscle", 150.0);

        assert_eq!(car.seats, 2);
        assert_eq!(car.status, CarStatus::Available);
        assert_eq!(car.license_plate, "Not assigned");
        assert_eq!(car.range_estimate, "Not specified");
        assert_eq!(car.mileage, 0);
        assert!(car.features.is_empty());
    }

    #[test]
    fn test_image_reference_invariant() {
        let mut car = Car::new("Mustang GT", "Coupe", "Muscle", 150.0);
        assert!(!car.has_image_reference());

        car.image_url = String::from("https://cdn.example.com/mustang.jpg");
        assert!(car.has_image_reference());

        car.image_url = String::new();
        car.set_image_data("data:image/png;base64,aGVsbG8=".to_string());
        assert!(car.has_image_reference());

        car.image_data = Some(String::from("   "));
        assert!(!car.has_image_reference());
    }

    #[test]
    fn test_category_validation() {
        assert!(is_valid_category("SUV"));
        assert!(is_valid_category("Ultra Luxury"));
        assert!(!is_valid_category("Spaceship"));
        assert!(!is_valid_category("suv"));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            CarStatus::Available,
            CarStatus::Rented,
            CarStatus::Maintenance,
            CarStatus::Reserved,
        ] {
            assert_eq!(status.as_str().parse::<CarStatus>().unwrap(), status);
        }
        assert!("scrapped".parse::<CarStatus>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&CarStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
    }
}
