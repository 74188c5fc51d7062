use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::review::{ReviewResponse, ReviewsQuery};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use de_core::domain::entities::review::Review;
use de_core::errors::DomainError;
use de_core::repositories::review::ReviewFilter;
use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::types::ApiResponse;

fn review_list_response(reviews: Vec<Review>) -> HttpResponse {
    let reviews: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    HttpResponse::Ok().json(ApiResponse::list(reviews))
}

fn parse_filter(query: ReviewsQuery) -> Result<ReviewFilter, DomainError> {
    let car_id = query
        .car_id
        .map(|raw| {
            Uuid::parse_str(&raw).map_err(|_| DomainError::validation("carId", "Invalid car ID"))
        })
        .transpose()?;

    let user_id = query
        .user_id
        .map(|raw| {
            Uuid::parse_str(&raw).map_err(|_| DomainError::validation("userId", "Invalid user ID"))
        })
        .transpose()?;

    let rating = query
        .rating
        .map(|raw| {
            raw.parse::<i32>()
                .map_err(|_| DomainError::validation("rating", "Invalid rating"))
        })
        .transpose()?;

    Ok(ReviewFilter {
        car_id,
        user_id,
        rating,
    })
}

/// Handler for GET /api/reviews
///
/// Public listing with optional `carId`, `userId`, and `rating` filters,
/// newest first.
pub async fn list<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    query: web::Query<ReviewsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let filter = match parse_filter(query.into_inner()) {
        Ok(filter) => filter,
        Err(error) => return domain_error_response(&error),
    };

    match state.review_service.list(filter).await {
        Ok(reviews) => review_list_response(reviews),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/reviews/car/{carId}
///
/// Public listing of one car's reviews. A valid id with no reviews answers
/// an empty list; the car's existence is not checked.
pub async fn list_for_car<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let car_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&DomainError::not_found("Car")),
    };

    match state.review_service.list_for_car(car_id).await {
        Ok(reviews) => review_list_response(reviews),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/reviews/user
///
/// The authenticated caller's own reviews, newest first.
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
    match state.review_service.list_own(&auth.caller()).await {
        Ok(reviews) => review_list_response(reviews),
        Err(error) => domain_error_response(&error),
    }
}
