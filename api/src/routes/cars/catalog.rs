use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::car::{CarResponse, CarsQuery};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use de_core::domain::entities::car::CarStatus;
use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/cars
///
/// Public catalog listing, newest first. Optional `category` and `status`
/// query parameters narrow the result; an unknown category simply matches
/// nothing, while an unknown status is rejected because the status set is
/// closed.
///
/// # Response
///
/// ```json
/// { "success": true, "count": 2, "data": [ { ... }, { ... } ] }
/// ```
pub async fn list<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    query: web::Query<CarsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let query = query.into_inner();

    let status = match query.status.as_deref() {
        Some(raw) => match raw.parse::<CarStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                return domain_error_response(&DomainError::validation(
                    "status",
                    "Invalid car status",
                ))
            }
        },
        None => None,
    };

    match state
        .catalog_service
        .list(query.category.as_deref(), status)
        .await
    {
        Ok(cars) => {
            let cars: Vec<CarResponse> = cars.into_iter().map(CarResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::list(cars))
        }
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/cars/{id}
///
/// Public car detail. A malformed or unknown id both answer 404, so the
/// route does not reveal which ids exist.
pub async fn detail<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
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

    match state.catalog_service.get(id).await {
        Ok(car) => HttpResponse::Ok().json(ApiResponse::success(CarResponse::from(car))),
        Err(error) => domain_error_response(&error),
    }
}
