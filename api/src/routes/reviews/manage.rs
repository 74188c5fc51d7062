use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::review::{ReviewResponse, UpdateReviewRequest};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::ReviewUpdate;
use de_shared::types::ApiResponse;

/// Handler for PUT /api/reviews/{id}
///
/// Edits a review. Allowed for the review's owner or an administrator; the
/// merged result is re-validated before it is stored.
pub async fn update<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdateReviewRequest>,
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
        Err(_) => return domain_error_response(&DomainError::not_found("Review")),
    };

    let update = ReviewUpdate::from(request.into_inner());

    match state
        .review_service
        .update(&auth.caller(), id, update)
        .await
    {
        Ok(review) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            ReviewResponse::from(review),
            "Review updated successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for DELETE /api/reviews/{id}
///
/// Deletes a review. Allowed for the review's owner or an administrator.
pub async fn delete<U, C, R, V, A>(
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
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Review")),
    };

    match state.review_service.delete(&auth.caller(), id).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::message("Review deleted successfully"))
        }
        Err(error) => domain_error_response(&error),
    }
}
