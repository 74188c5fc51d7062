use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::dto::first_validation_message;
use crate::handlers::domain_error_response;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for POST /api/auth/login
///
/// Verifies email/password credentials and issues an access token. The
/// configured admin pair short-circuits to the synthetic admin identity.
///
/// # Errors
/// - 400 Bad Request: Missing email or password
/// - 401 Unauthorized: Credentials rejected
pub async fn login<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::success(AuthResponse::from(session))),
        Err(error) => domain_error_response(&error),
    }
}
