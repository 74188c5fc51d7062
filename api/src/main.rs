//! DriveEasy API server binary
//!
//! Loads configuration from the environment, connects to MySQL, runs the
//! pending migrations, wires the repositories into the domain services, and
//! serves the HTTP API.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use de_api::app::create_app;
use de_api::routes::AppState;
use de_core::services::{
    AnalyticsService, AuthService, AuthServiceConfig, CatalogService, RentalService,
    ReviewService, TokenService, TokenServiceConfig,
};
use de_infra::{
    DatabasePool, MySqlAnalyticsRepository, MySqlCarRepository, MySqlRentalRepository,
    MySqlReviewRepository, MySqlUserRepository,
};
use de_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    tracing::info!(
        environment = ?config.environment,
        "Starting DriveEasy API server"
    );

    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; tokens are signed with the default development secret"
        );
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    pool.run_migrations()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!("Database ready: {}", pool.get_statistics());

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let car_repository = Arc::new(MySqlCarRepository::new(pool.get_pool().clone()));
    let rental_repository = Arc::new(MySqlRentalRepository::new(pool.get_pool().clone()));
    let review_repository = Arc::new(MySqlReviewRepository::new(pool.get_pool().clone()));
    let analytics_repository = Arc::new(MySqlAnalyticsRepository::new(pool.get_pool().clone()));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig::from(&config.auth),
    ));
    let catalog_service = Arc::new(CatalogService::new(Arc::clone(&car_repository)));
    let rental_service = Arc::new(RentalService::new(Arc::clone(&rental_repository)));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repository),
        Arc::clone(&rental_repository),
    ));
    let analytics_service = Arc::new(AnalyticsService::new(Arc::clone(&analytics_repository)));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
        catalog_service,
        rental_service,
        review_service,
        analytics_service,
    });

    let bind_address = config.server.bind_address();
    tracing::info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let keep_alive = config.server.keep_alive;
    let app_config = config.clone();

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(keep_alive));

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
