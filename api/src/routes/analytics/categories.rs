use actix_web::{web, HttpResponse};

use crate::handlers::domain_error_response;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/analytics/categories
///
/// Public. Fleet size, rental demand, and average price per category,
/// busiest category first.
pub async fn categories<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    match state.analytics_service.category_popularity().await {
        Ok(categories) => HttpResponse::Ok().json(ApiResponse::success(categories)),
        Err(error) => domain_error_response(&error),
    }
}
