use actix_web::{web, HttpResponse};

use crate::dto::auth::{UpdateProfileRequest, UserResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for GET /api/auth/profile
///
/// Returns the authenticated caller's account. The synthetic admin identity
/// has no stored row and gets a synthesized record.
pub async fn profile<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    match state.auth_service.profile(&auth.caller()).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for PUT /api/auth/profile
///
/// Updates the caller's name and/or phone. Fields left out of the body keep
/// their stored value.
pub async fn update_profile<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let update = request.into_inner();

    match state
        .auth_service
        .update_profile(&auth.caller(), update.name, update.phone)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Profile updated successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}
