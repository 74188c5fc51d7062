use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, RegisterRequest};
use crate::dto::first_validation_message;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for POST /api/auth/register
///
/// Creates a user account and issues an access token in the same call.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "message": "User registered successfully",
///     "data": { "token": "...", "expiresIn": 86400, "user": { ... } }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing/invalid fields, or email already registered
pub async fn register<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error(first_validation_message(&errors)));
    }

    match state
        .auth_service
        .register(
            &request.name,
            &request.email,
            &request.password,
            &request.phone,
        )
        .await
    {
        Ok(session) => HttpResponse::Created().json(ApiResponse::success_with_message(
            AuthResponse::from(session),
            "User registered successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}
