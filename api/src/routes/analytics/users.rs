use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/analytics/user/{userId}/history
///
/// Admin or the user themselves. Each entry joins the rental with its car's
/// details and the caller's review of it, when one exists.
pub async fn user_history<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("User")),
    };

    match state
        .analytics_service
        .user_rental_history(&auth.caller(), user_id)
        .await
    {
        Ok(history) => HttpResponse::Ok().json(ApiResponse::success(history)),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/analytics/user/{userId}/reviews
///
/// Admin or the user themselves. Review count, average rating, and the
/// per-review rating distribution.
pub async fn user_reviews<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("User")),
    };

    match state
        .analytics_service
        .user_review_stats(&auth.caller(), user_id)
        .await
    {
        Ok(stats) => HttpResponse::Ok().json(ApiResponse::success(stats)),
        Err(error) => domain_error_response(&error),
    }
}
