//! DTOs for catalog and fleet-management endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use de_core::domain::entities::car::{Car, CarStatus};
use de_core::errors::DomainError;
use de_core::services::{ImageAttachmentResult, NewCar, UpdateCar};

/// Query parameters accepted by the catalog listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarsQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Fields accepted when an administrator adds a car
///
/// Everything is defaulted at the serde level so missing fields reach the
/// domain validation instead of failing JSON deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCarRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub category: String,
    pub price_per_day: f64,
    pub seats: Option<i32>,
    pub status: Option<String>,
    pub features: Option<Vec<String>>,
    #[serde(rename = "range")]
    pub range_estimate: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub license_plate: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

impl TryFrom<CreateCarRequest> for NewCar {
    type Error = DomainError;

    fn try_from(request: CreateCarRequest) -> Result<Self, Self::Error> {
        Ok(NewCar {
            name: request.name,
            car_type: request.car_type,
            category: request.category,
            price_per_day: request.price_per_day,
            seats: request.seats,
            status: parse_status(request.status.as_deref())?,
            features: request.features,
            range_estimate: request.range_estimate,
            description: request.description,
            year: request.year,
            mileage: request.mileage,
            license_plate: request.license_plate,
            last_maintenance_date: parse_date(request.last_maintenance_date.as_deref())?,
            image_url: request.image_url,
            image_data: request.image_data,
        })
    }
}

/// Partial car update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCarRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub category: Option<String>,
    pub price_per_day: Option<f64>,
    pub seats: Option<i32>,
    pub status: Option<String>,
    pub features: Option<Vec<String>>,
    #[serde(rename = "range")]
    pub range_estimate: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub license_plate: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

impl TryFrom<UpdateCarRequest> for UpdateCar {
    type Error = DomainError;

    fn try_from(request: UpdateCarRequest) -> Result<Self, Self::Error> {
        Ok(UpdateCar {
            name: request.name,
            car_type: request.car_type,
            category: request.category,
            price_per_day: request.price_per_day,
            seats: request.seats,
            status: parse_status(request.status.as_deref())?,
            features: request.features,
            range_estimate: request.range_estimate,
            description: request.description,
            year: request.year,
            mileage: request.mileage,
            license_plate: request.license_plate,
            last_maintenance_date: parse_date(request.last_maintenance_date.as_deref())?,
            image_url: request.image_url,
            image_data: request.image_data,
        })
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<CarStatus>, DomainError> {
    status
        .map(|s| {
            s.parse::<CarStatus>()
                .map_err(|_| DomainError::validation("status", "Invalid car status"))
        })
        .transpose()
}

fn parse_date(date: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    date.map(|d| {
        NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| DomainError::validation("lastMaintenanceDate", "Invalid date format"))
    })
    .transpose()
}

/// Public view of a catalog car
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub category: String,
    pub price_per_day: f64,
    pub seats: i32,
    pub status: CarStatus,
    pub features: Vec<String>,
    #[serde(rename = "range")]
    pub range_estimate: String,
    pub description: String,
    pub year: i32,
    pub mileage: i64,
    pub license_plate: String,
    pub last_maintenance_date: NaiveDate,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            car_type: car.car_type,
            category: car.category,
            price_per_day: car.price_per_day,
            seats: car.seats,
            status: car.status,
            features: car.features,
            range_estimate: car.range_estimate,
            description: car.description,
            year: car.year,
            mileage: car.mileage,
            license_plate: car.license_plate,
            last_maintenance_date: car.last_maintenance_date,
            image_url: car.image_url,
            image_data: car.image_data,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Body of the batch image upload
///
/// `carImages` is kept as raw JSON so a missing or non-array value can be
/// rejected with the contract message rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchImageUploadRequest {
    pub car_images: Option<serde_json::Value>,
}

/// One entry of the batch image upload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarImageItem {
    pub car_id: Option<String>,
    pub image_data: Option<String>,
}

/// Per-item outcome reported back to the admin client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResult {
    pub car_id: String,
    pub success: bool,
    pub message: String,
}

impl From<ImageAttachmentResult> for ImageUploadResult {
    fn from(result: ImageAttachmentResult) -> Self {
        Self {
            car_id: result.car_id,
            success: result.success,
            message: result.message,
        }
    }
}

/// Response of the batch image upload
///
/// This endpoint predates the standard envelope and reports its items under
/// `results` instead of `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchImageUploadResponse {
    pub success: bool,
    pub results: Vec<ImageUploadResult>,
}
