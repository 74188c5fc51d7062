use actix_web::{web, HttpResponse};

use crate::dto::rental::{CreateRentalRequest, RentalResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::BookingRequest;
use de_shared::types::ApiResponse;

/// Handler for POST /api/rentals
///
/// Books a car for the authenticated caller. The booking passes through the
/// fixed validation rule chain; the first failing rule is reported and the
/// rest are not evaluated. The client-computed total price is stored
/// verbatim.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "success": true, "message": "Rental created successfully", "data": { ... } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: A validation rule failed (message names the rule)
/// - 401 Unauthorized: Missing or invalid token
pub async fn create<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    request: web::Json<CreateRentalRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let booking = BookingRequest::from(request.into_inner());

    match state.rental_service.create(&auth.caller(), booking).await {
        Ok(rental) => HttpResponse::Created().json(ApiResponse::success_with_message(
            RentalResponse::from(rental),
            "Rental created successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}
