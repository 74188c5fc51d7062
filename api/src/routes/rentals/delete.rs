use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::domain_error_response;
use crate::middleware::AdminContext;
use crate::routes::AppState;

use de_core::errors::DomainError;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

/// Handler for DELETE /api/rentals/{id}
///
/// Admin only. Removes a booking outright; reviews referencing it are kept.
pub async fn delete<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
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
        Err(_) => return domain_error_response(&DomainError::not_found("Rental")),
    };

    match state.rental_service.delete(&admin.0.caller(), id).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::message("Rental deleted successfully"))
        }
        Err(error) => domain_error_response(&error),
    }
}
