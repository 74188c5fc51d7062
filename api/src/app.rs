//! Application state and factory
//!
//! Builds the Actix application from the shared state: route table,
//! per-route JWT wrapping, CORS, logging, and the JSON payload limit.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_shared::config::AppConfig;
use de_shared::types::ApiResponse;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{analytics, auth, cars, rentals, reviews, AppState};

/// Create and configure the application with all dependencies
///
/// Called once per worker by `HttpServer`, and directly by the integration
/// tests with in-memory repositories behind the same state type.
pub fn create_app<U, C, R, V, A>(
    app_state: web::Data<AppState<U, C, R, V, A>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let cors = create_cors(&config.cors);

    // Per-route authentication; public routes are simply not wrapped
    let jwt = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        // Batch image uploads carry base64 payloads well past the default limit
        .app_data(web::JsonConfig::default().limit(config.server.max_payload_size))
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, C, R, V, A>))
                        .route("/login", web::post().to(auth::login::<U, C, R, V, A>))
                        .route(
                            "/profile",
                            web::get()
                                .to(auth::profile::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/profile",
                            web::put()
                                .to(auth::update_profile::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/cars")
                        .route(
                            "/upload-batch",
                            web::post()
                                .to(cars::upload_batch::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route("", web::get().to(cars::list::<U, C, R, V, A>))
                        .route(
                            "",
                            web::post()
                                .to(cars::create::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route("/{id}", web::get().to(cars::detail::<U, C, R, V, A>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(cars::update::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(cars::delete::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/rentals")
                        .route(
                            "/user",
                            web::get()
                                .to(rentals::list_own::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "",
                            web::post()
                                .to(rentals::create::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "",
                            web::get()
                                .to(rentals::list_all::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(rentals::delete::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .route(
                            "/car/{car_id}",
                            web::get().to(reviews::list_for_car::<U, C, R, V, A>),
                        )
                        .route(
                            "/user",
                            web::get()
                                .to(reviews::list_own::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route("", web::get().to(reviews::list::<U, C, R, V, A>))
                        .route(
                            "",
                            web::post()
                                .to(reviews::submit::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/{id}",
                            web::put()
                                .to(reviews::update::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(reviews::delete::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/analytics")
                        .route(
                            "/rentals",
                            web::get()
                                .to(analytics::rental_statistics::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/categories",
                            web::get().to(analytics::categories::<U, C, R, V, A>),
                        )
                        .route(
                            "/user/{user_id}/history",
                            web::get()
                                .to(analytics::user_history::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/user/{user_id}/reviews",
                            web::get()
                                .to(analytics::user_reviews::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/car/{car_id}/availability",
                            web::get()
                                .to(analytics::car_availability::<U, C, R, V, A>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/car/{car_id}/performance",
                            web::get()
                                .to(analytics::car_performance::<U, C, R, V, A>)
                                .wrap(jwt),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "drive-easy-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "The requested resource was not found",
    ))
}
