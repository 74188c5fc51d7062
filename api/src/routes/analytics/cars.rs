use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::analytics::DateRangeQuery;
use crate::handlers::domain_error_response;
use crate::middleware::AdminContext;
use crate::routes::AppState;

use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/analytics/car/{carId}/availability
///
/// Admin only. Rental pressure on one car over a required date window; a
/// window with no overlapping rentals answers all zeroes rather than an
/// error.
pub async fn car_availability<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    path: web::Path<String>,
    query: web::Query<DateRangeQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let car_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Car")),
    };

    let query = query.into_inner();

    match state
        .analytics_service
        .car_availability(
            &admin.0.caller(),
            car_id,
            query.start_date.as_deref(),
            query.end_date.as_deref(),
        )
        .await
    {
        Ok(availability) => HttpResponse::Ok().json(ApiResponse::success(availability)),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/analytics/car/{carId}/performance
///
/// Admin only. Lifetime rental totals, review average, and the share of
/// the car's rentals whose window contains today.
pub async fn car_performance<U, C, R, V, A>(
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
    let car_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Car")),
    };

    match state
        .analytics_service
        .car_performance(&admin.0.caller(), car_id)
        .await
    {
        Ok(performance) => HttpResponse::Ok().json(ApiResponse::success(performance)),
        Err(error) => domain_error_response(&error),
    }
}
