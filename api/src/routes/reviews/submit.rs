use actix_web::{web, HttpResponse};

use crate::dto::review::{CreateReviewRequest, ReviewResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::NewReview;
use de_shared::types::ApiResponse;

/// Handler for POST /api/reviews
///
/// Submits a review for a rental the caller owns. Each rental can be
/// reviewed once per user; a second attempt answers 400.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "success": true, "message": "Review submitted successfully", "data": { ... } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid fields or duplicate review
/// - 403 Forbidden: The rental belongs to another user
/// - 404 Not Found: The rental does not exist
pub async fn submit<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let new_review = NewReview::from(request.into_inner());

    match state.review_service.create(&auth.caller(), new_review).await {
        Ok(review) => HttpResponse::Created().json(ApiResponse::success_with_message(
            ReviewResponse::from(review),
            "Review submitted successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}
