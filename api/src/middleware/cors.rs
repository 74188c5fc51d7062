//! CORS middleware configuration for cross-origin requests.
//!
//! The browser clients are served from a different origin than the API, so
//! every route group is wrapped with this middleware. The settings come from
//! [`CorsConfig`]: development runs permissive (any origin, any header),
//! production enumerates its allowed origins explicitly.

use actix_cors::Cors;

use de_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the application configuration.
///
/// A `*` entry in the origin, method, or header lists switches that
/// dimension to allow-any. The wildcard is never sent back literally, so
/// allow-any origin stays compatible with credentialed requests.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if !config.enabled {
        return cors;
    }

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        tracing::info!("Configuring permissive CORS for development");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            tracing::info!("Adding allowed CORS origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors = if config.allowed_methods.iter().any(|method| method == "*") {
        cors.allow_any_method()
    } else {
        cors.allowed_methods(config.allowed_methods.iter().map(String::as_str))
    };

    cors = if config.allowed_headers.iter().any(|header| header == "*") {
        cors.allow_any_header()
    } else {
        cors.allowed_headers(config.allowed_headers.iter().map(String::as_str))
    };

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors.max_age(config.max_age as usize)
}
