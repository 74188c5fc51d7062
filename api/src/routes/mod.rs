//! HTTP route handlers grouped by resource.

pub mod analytics;
pub mod auth;
pub mod cars;
pub mod rentals;
pub mod reviews;

use std::sync::Arc;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::{
    AnalyticsService, AuthService, CatalogService, RentalService, ReviewService, TokenService,
};

/// Application state that holds the shared services
///
/// Built once in `main` (or a test harness) and handed to every worker via
/// `web::Data`. The generic parameters are the repository implementations,
/// so tests can assemble the full application over in-memory fakes.
pub struct AppState<U, C, R, V, A>
where
    U: UserRepository,
    C: CarRepository,
    R: RentalRepository,
    V: ReviewRepository,
    A: AnalyticsRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
    pub catalog_service: Arc<CatalogService<C>>,
    pub rental_service: Arc<RentalService<R>>,
    pub review_service: Arc<ReviewService<V, R>>,
    pub analytics_service: Arc<AnalyticsService<A>>,
}
