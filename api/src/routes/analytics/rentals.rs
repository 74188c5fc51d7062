use actix_web::{web, HttpResponse};

use crate::dto::analytics::RentalStatsQuery;
use crate::handlers::domain_error_response;
use crate::middleware::AdminContext;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/analytics/rentals
///
/// Admin only. Per-car rental totals over a required date window, with an
/// optional category filter applied to the car the rental was booked for.
///
/// # Errors
/// - 400 Bad Request: Missing or malformed `startDate`/`endDate`
/// - 403 Forbidden: Non-admin caller
pub async fn rental_statistics<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    query: web::Query<RentalStatsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let query = query.into_inner();

    match state
        .analytics_service
        .rental_statistics(
            &admin.0.caller(),
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            query.category.as_deref(),
        )
        .await
    {
        Ok(statistics) => HttpResponse::Ok().json(ApiResponse::success(statistics)),
        Err(error) => domain_error_response(&error),
    }
}
