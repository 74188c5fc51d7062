//! Shared fixtures for the HTTP integration tests.
//!
//! Each test binary assembles the full application over the in-memory
//! repository mocks exported by `de_core`, so requests exercise the real
//! route table, middleware, and services with no database.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::NaiveDate;
use uuid::Uuid;

use de_api::routes::AppState;
use de_core::domain::entities::{Car, Rental, Review, Role, ADMIN_USER_ID};
use de_core::repositories::{
    MockAnalyticsRepository, MockCarRepository, MockRentalRepository, MockReviewRepository,
    MockUserRepository,
};
use de_core::services::{
    AnalyticsService, AuthService, AuthServiceConfig, CatalogService, RentalService,
    ReviewService, TokenService, TokenServiceConfig,
};
use de_shared::config::AppConfig;

pub type TestState = AppState<
    MockUserRepository,
    MockCarRepository,
    MockRentalRepository,
    MockReviewRepository,
    MockAnalyticsRepository,
>;

/// Handles to everything behind a test application
pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub cars: Arc<MockCarRepository>,
    pub rentals: Arc<MockRentalRepository>,
    pub reviews: Arc<MockReviewRepository>,
    pub analytics: Arc<MockAnalyticsRepository>,
    pub token_service: Arc<TokenService>,
    pub state: web::Data<TestState>,
    pub config: AppConfig,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let cars = Arc::new(MockCarRepository::new());
        let rentals = Arc::new(MockRentalRepository::new());
        let reviews = Arc::new(MockReviewRepository::new());
        let analytics = Arc::new(MockAnalyticsRepository::new());

        let config = AppConfig::default();

        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
            &config.auth.jwt,
        )));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&token_service),
            AuthServiceConfig {
                admin_email: config.auth.admin.email.clone(),
                admin_password: config.auth.admin.password.clone(),
                // Minimum cost keeps the registration tests fast
                bcrypt_cost: 4,
            },
        ));
        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&cars)));
        let rental_service = Arc::new(RentalService::new(Arc::clone(&rentals)));
        let review_service = Arc::new(ReviewService::new(
            Arc::clone(&reviews),
            Arc::clone(&rentals),
        ));
        let analytics_service = Arc::new(AnalyticsService::new(Arc::clone(&analytics)));

        let state = web::Data::new(AppState {
            auth_service,
            token_service: Arc::clone(&token_service),
            catalog_service,
            rental_service,
            review_service,
            analytics_service,
        });

        Self {
            users,
            cars,
            rentals,
            reviews,
            analytics,
            token_service,
            state,
            config,
        }
    }

    /// Signed bearer token for an ordinary user
    pub fn user_token(&self, user_id: Uuid, email: &str) -> String {
        self.token_service
            .issue_token(user_id, email, Role::User)
            .unwrap()
            .token
    }

    /// Signed bearer token for the synthetic admin
    pub fn admin_token(&self) -> String {
        self.token_service
            .issue_token(ADMIN_USER_ID, &self.config.auth.admin.email, Role::Admin)
            .unwrap()
            .token
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Authorization header pair for a bearer token
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Catalog car with an image so the pre-save invariant holds
pub fn sample_car(name: &str, category: &str, price_per_day: f64) -> Car {
    let mut car = Car::new(name, "Coupe", category, price_per_day);
    car.image_url = format!("https://cdn.driveeasy.test/{}.jpg", car.id);
    car
}

/// Rental owned by `user_id`, three days at 125.0/day
pub fn sample_rental(user_id: Uuid, car_id: Uuid) -> Rental {
    Rental {
        id: Uuid::new_v4(),
        car_id,
        car_name: "Aston Martin DB11".to_string(),
        price_per_day: 125.0,
        total_price: 375.0,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+1 555-0100".to_string(),
        pickup_date: date(2025, 6, 1),
        return_date: date(2025, 6, 4),
        pickup_location: "Downtown".to_string(),
        return_location: "Airport".to_string(),
        additional_drivers: 0,
        insurance: false,
        special_requests: None,
        user_id,
        created_at: chrono::Utc::now(),
    }
}

/// Verified five-star review by `user_id` for the given rental
pub fn sample_review(user_id: Uuid, rental_id: Uuid, car_id: Uuid) -> Review {
    Review::new(user_id, rental_id, car_id, 5, "Superb", "Flawless weekend trip")
}
