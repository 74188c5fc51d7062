use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::car::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::handlers::domain_error_response;
use crate::middleware::AdminContext;
use crate::routes::AppState;

use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::{NewCar, UpdateCar};
use de_shared::types::ApiResponse;

/// Handler for POST /api/cars
///
/// Admin only. Adds a car to the catalog; optional fields fall back to the
/// catalog defaults, and a car without any image reference is rejected.
///
/// # Errors
/// - 400 Bad Request: Missing required fields, bad category/status, no image
/// - 401/403: Missing token or non-admin caller
pub async fn create<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    request: web::Json<CreateCarRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let new_car = match NewCar::try_from(request.into_inner()) {
        Ok(new_car) => new_car,
        Err(error) => return domain_error_response(&error),
    };

    match state.catalog_service.create(&admin.0.caller(), new_car).await {
        Ok(car) => HttpResponse::Created().json(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Car added successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for PUT /api/cars/{id}
///
/// Admin only. Partial update; absent fields keep their stored value.
pub async fn update<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    path: web::Path<String>,
    request: web::Json<UpdateCarRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Car")),
    };

    let update = match UpdateCar::try_from(request.into_inner()) {
        Ok(update) => update,
        Err(error) => return domain_error_response(&error),
    };

    match state
        .catalog_service
        .update(&admin.0.caller(), id, update)
        .await
    {
        Ok(car) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Car updated successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for DELETE /api/cars/{id}
///
/// Admin only. Existing rentals keep their snapshot of the car's name and
/// price, so deletion does not cascade.
pub async fn delete<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Car")),
    };

    match state.catalog_service.delete(&admin.0.caller(), id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message("Car deleted successfully")),
        Err(error) => domain_error_response(&error),
    }
}
