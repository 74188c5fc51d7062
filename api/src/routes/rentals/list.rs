use actix_web::{web, HttpResponse};

use crate::dto::rental::RentalResponse;
use crate::handlers::domain_error_response;
use crate::middleware::{AdminContext, AuthContext};
use crate::routes::AppState;

use de_core::domain::entities::rental::Rental;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

fn rental_list_response(rentals: Vec<Rental>) -> HttpResponse {
    let rentals: Vec<RentalResponse> = rentals.into_iter().map(RentalResponse::from).collect();
    HttpResponse::Ok().json(ApiResponse::list(rentals))
}

/// Handler for GET /api/rentals
///
/// Admin only. Every rental in the system, newest first.
pub async fn list_all<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    match state.rental_service.list_all(&admin.0.caller()).await {
        Ok(rentals) => rental_list_response(rentals),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/rentals/user
///
/// The authenticated caller's own rentals, newest first.
pub async fn list_own<U, C, R, V, A>(
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
    match state.rental_service.list_own(&auth.caller()).await {
        Ok(rentals) => rental_list_response(rentals),
        Err(error) => domain_error_response(&error),
    }
}
