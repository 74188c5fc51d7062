//! Main catalog service implementation

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use de_shared::utils::validation::is_plausible_base64_image;

use crate::domain::entities::car::{
    is_valid_category, Car, CarStatus, MAX_SEATS, MIN_SEATS,
};
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CarRepository;

/// Fields accepted when an administrator adds a car
///
/// Optional fields fall back to the catalog defaults from [`Car::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCar {
    pub name: String,
    pub car_type: String,
    pub category: String,
    pub price_per_day: f64,
    pub seats: Option<i32>,
    pub status: Option<CarStatus>,
    pub features: Option<Vec<String>>,
    pub range_estimate: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub license_plate: Option<String>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

/// Partial car update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCar {
    pub name: Option<String>,
    pub car_type: Option<String>,
    pub category: Option<String>,
    pub price_per_day: Option<f64>,
    pub seats: Option<i32>,
    pub status: Option<CarStatus>,
    pub features: Option<Vec<String>>,
    pub range_estimate: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub license_plate: Option<String>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

/// One entry in a batch image upload
///
/// Both fields are optional on the wire; an incomplete entry produces a
/// per-item failure instead of failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAttachment {
    pub car_id: Option<String>,
    pub image_data: Option<String>,
}

/// Per-item outcome of a batch image upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachmentResult {
    pub car_id: String,
    pub success: bool,
    pub message: String,
}

impl ImageAttachmentResult {
    fn ok(car_id: impl Into<String>) -> Self {
        Self {
            car_id: car_id.into(),
            success: true,
            message: String::from("Image updated successfully"),
        }
    }

    fn failed(car_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            car_id: car_id.into(),
            success: false,
            message: message.into(),
        }
    }
}

/// Catalog service for fleet reads and admin fleet management
pub struct CatalogService<C: CarRepository> {
    /// Car repository for database operations
    car_repository: Arc<C>,
}

impl<C: CarRepository> CatalogService<C> {
    /// Create a new catalog service
    pub fn new(car_repository: Arc<C>) -> Self {
        Self { car_repository }
    }

    /// List cars, optionally narrowed by category and status, newest first
    pub async fn list(
        &self,
        category: Option<&str>,
        status: Option<CarStatus>,
    ) -> DomainResult<Vec<Car>> {
        self.car_repository.find_filtered(category, status).await
    }

    /// Fetch one car by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Car> {
        self.car_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Car"))
    }

    /// Add a car to the fleet
    ///
    /// Admin only. Optional fields take the catalog defaults; the car must
    /// end up with at least one image reference.
    pub async fn create(&self, caller: &Caller, request: NewCar) -> DomainResult<Car> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        Self::validate_required(&request.name, &request.car_type, &request.category)?;
        Self::validate_bounds(
            request.price_per_day,
            request.seats.unwrap_or(2),
            &request.category,
        )?;

        let mut car = Car::new(
            request.name.trim(),
            request.car_type.trim(),
            request.category.trim(),
            request.price_per_day,
        );
        if let Some(seats) = request.seats {
            car.seats = seats;
        }
        if let Some(status) = request.status {
            car.status = status;
        }
        if let Some(features) = request.features {
            car.features = features;
        }
        if let Some(range_estimate) = request.range_estimate {
            car.range_estimate = range_estimate;
        }
        if let Some(description) = request.description {
            car.description = description;
        }
        if let Some(year) = request.year {
            car.year = year;
        }
        if let Some(mileage) = request.mileage {
            car.mileage = mileage;
        }
        if let Some(license_plate) = request.license_plate {
            car.license_plate = license_plate;
        }
        if let Some(date) = request.last_maintenance_date {
            car.last_maintenance_date = date;
        }
        if let Some(image_url) = request.image_url {
            car.image_url = image_url;
        }
        car.image_data = request.image_data;

        if !car.has_image_reference() {
            return Err(DomainError::validation(
                "imageUrl",
                "Either imageUrl or imageData must be provided",
            ));
        }

        let created = self.car_repository.create(car).await?;

        tracing::info!(
            car_id = %created.id,
            admin_id = %caller.user_id,
            name = %created.name,
            event = "car_added",
            "New car added by admin"
        );

        Ok(created)
    }

    /// Apply a partial update to a car
    ///
    /// Admin only. The merged result is validated as a whole, so an update
    /// can neither move a car into an unknown category nor strip its last
    /// image reference.
    pub async fn update(&self, caller: &Caller, id: Uuid, request: UpdateCar) -> DomainResult<Car> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        let mut car = self
            .car_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Car"))?;

        if let Some(name) = request.name {
            car.name = name.trim().to_string();
        }
        if let Some(car_type) = request.car_type {
            car.car_type = car_type.trim().to_string();
        }
        if let Some(category) = request.category {
            car.category = category.trim().to_string();
        }
        if let Some(price_per_day) = request.price_per_day {
            car.price_per_day = price_per_day;
        }
        if let Some(seats) = request.seats {
            car.seats = seats;
        }
        if let Some(status) = request.status {
            car.status = status;
        }
        if let Some(features) = request.features {
            car.features = features;
        }
        if let Some(range_estimate) = request.range_estimate {
            car.range_estimate = range_estimate;
        }
        if let Some(description) = request.description {
            car.description = description;
        }
        if let Some(year) = request.year {
            car.year = year;
        }
        if let Some(mileage) = request.mileage {
            car.mileage = mileage;
        }
        if let Some(license_plate) = request.license_plate {
            car.license_plate = license_plate;
        }
        if let Some(date) = request.last_maintenance_date {
            car.last_maintenance_date = date;
        }
        if let Some(image_url) = request.image_url {
            car.image_url = image_url;
        }
        if let Some(image_data) = request.image_data {
            car.image_data = Some(image_data);
        }

        Self::validate_required(&car.name, &car.car_type, &car.category)?;
        Self::validate_bounds(car.price_per_day, car.seats, &car.category)?;

        if !car.has_image_reference() {
            return Err(DomainError::validation(
                "imageUrl",
                "Either imageUrl or imageData must be provided",
            ));
        }

        car.touch();
        let updated = self.car_repository.update(car).await?;

        tracing::info!(
            car_id = %updated.id,
            admin_id = %caller.user_id,
            event = "car_updated",
            "Car updated by admin"
        );

        Ok(updated)
    }

    /// Remove a car from the fleet
    ///
    /// Admin only.
    pub async fn delete(&self, caller: &Caller, id: Uuid) -> DomainResult<()> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        let deleted = self.car_repository.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("Car"));
        }

        tracing::info!(
            car_id = %id,
            admin_id = %caller.user_id,
            event = "car_deleted",
            "Car deleted by admin"
        );

        Ok(())
    }

    /// Attach images to existing cars in one batch
    ///
    /// Admin only. Each entry is processed independently and reported in the
    /// results list; a bad entry never aborts the rest of the batch.
    pub async fn attach_images(
        &self,
        caller: &Caller,
        batch: Vec<ImageAttachment>,
    ) -> DomainResult<Vec<ImageAttachmentResult>> {
        if !caller.is_admin() {
            return Err(DomainError::forbidden("Admin access required"));
        }

        let mut results = Vec::with_capacity(batch.len());

        for item in batch {
            let car_id = item.car_id.as_deref().map(str::trim).unwrap_or("");
            let image_data = item.image_data.as_deref().map(str::trim).unwrap_or("");

            if car_id.is_empty() || image_data.is_empty() {
                let label = if car_id.is_empty() { "unknown" } else { car_id };
                results.push(ImageAttachmentResult::failed(
                    label,
                    "Missing required fields",
                ));
                continue;
            }

            if !is_plausible_base64_image(image_data) {
                results.push(ImageAttachmentResult::failed(car_id, "Invalid image data"));
                continue;
            }

            results.push(self.attach_one(car_id, image_data).await);
        }

        tracing::info!(
            admin_id = %caller.user_id,
            total = results.len(),
            updated = results.iter().filter(|r| r.success).count(),
            event = "car_images_attached",
            "Batch image upload processed"
        );

        Ok(results)
    }

    /// Look up one car and store its image payload, reporting the outcome
    /// instead of propagating errors
    async fn attach_one(&self, car_id: &str, image_data: &str) -> ImageAttachmentResult {
        let id = match Uuid::parse_str(car_id) {
            Ok(id) => id,
            Err(_) => return ImageAttachmentResult::failed(car_id, "Car not found"),
        };

        let car = match self.car_repository.find_by_id(id).await {
            Ok(Some(car)) => car,
            Ok(None) => return ImageAttachmentResult::failed(car_id, "Car not found"),
            Err(err) => return ImageAttachmentResult::failed(car_id, err.to_string()),
        };

        let mut car = car;
        car.set_image_data(image_data.to_string());

        match self.car_repository.update(car).await {
            Ok(_) => ImageAttachmentResult::ok(car_id),
            Err(err) => ImageAttachmentResult::failed(car_id, err.to_string()),
        }
    }

    /// Required text fields, checked in declaration order
    fn validate_required(name: &str, car_type: &str, category: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Car name is required"));
        }
        if car_type.trim().is_empty() {
            return Err(DomainError::validation("type", "Car type is required"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation(
                "category",
                "Car category is required",
            ));
        }
        Ok(())
    }

    /// Numeric bounds plus the closed category list
    fn validate_bounds(price_per_day: f64, seats: i32, category: &str) -> DomainResult<()> {
        if !is_valid_category(category.trim()) {
            return Err(DomainError::validation("category", "Invalid car category"));
        }
        if price_per_day < 0.0 {
            return Err(DomainError::validation(
                "pricePerDay",
                "Price per day cannot be negative",
            ));
        }
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(DomainError::validation(
                "seats",
                "Seats must be between 1 and 10",
            ));
        }
        Ok(())
    }
}
