//! Maps domain errors onto HTTP status codes and the response envelope.
//!
//! Every handler funnels service failures through [`domain_error_response`]
//! so that one table decides the status code and caller-facing message for
//! each error variant. Failures raised before a handler runs (middleware,
//! extractors) go through [`ApiError`] instead, which renders the same
//! envelope via `ResponseError`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use de_core::errors::{AuthError, DomainError};
use de_shared::types::ApiResponse;

/// Body sent whenever an internal failure must be hidden from the caller
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again later.";

/// Render a domain error as an HTTP response
///
/// Internal variants are logged server-side and replaced with
/// [`INTERNAL_ERROR_MESSAGE`]; every other variant carries its own
/// caller-facing text. Token failures collapse into a single message so
/// the response does not reveal why verification failed.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    if error.is_internal() {
        tracing::error!("Request failed with internal error: {}", error);
        return HttpResponse::build(status)
            .json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE));
    }

    let message = match error {
        DomainError::Token(_) => String::from("Invalid or expired token"),
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ApiResponse::<()>::error(message))
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. }
        | DomainError::Duplicate { .. }
        | DomainError::Booking(_)
        | DomainError::Auth(AuthError::EmailTaken) => StatusCode::BAD_REQUEST,
        DomainError::Unauthenticated
        | DomainError::Token(_)
        | DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Database(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error raised by middleware and extractors
///
/// Actix renders these through `ResponseError`, so auth failures produce
/// the same `{success, message}` body as handler failures.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 401 with a caller-facing message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    /// 403 with a caller-facing message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ApiResponse::<()>::error(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use de_core::errors::TokenError;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_validation_maps_to_400_with_message() {
        let error = DomainError::validation("email", "Valid email is required");
        let response = domain_error_response(&error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Valid email is required");
    }

    #[actix_rt::test]
    async fn test_invalid_credentials_maps_to_401() {
        let error = DomainError::from(AuthError::InvalidCredentials);
        let response = domain_error_response(&error);

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid credentials");
    }

    #[actix_rt::test]
    async fn test_email_taken_maps_to_400() {
        let error = DomainError::from(AuthError::EmailTaken);
        let response = domain_error_response(&error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "User already exists");
    }

    #[actix_rt::test]
    async fn test_token_errors_collapse_to_one_message() {
        for token_error in [TokenError::Expired, TokenError::Invalid] {
            let error = DomainError::from(token_error);
            let response = domain_error_response(&error);

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let json = body_json(response).await;
            assert_eq!(json["message"], "Invalid or expired token");
        }
    }

    #[actix_rt::test]
    async fn test_not_found_names_the_resource() {
        let error = DomainError::not_found("Car");
        let response = domain_error_response(&error);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Car not found");
    }

    #[actix_rt::test]
    async fn test_internal_errors_are_masked() {
        let error = DomainError::Database("connection refused".to_string());
        let response = domain_error_response(&error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!json["message"].as_str().unwrap().contains("connection"));
    }

    #[actix_rt::test]
    async fn test_api_error_renders_envelope() {
        let error = ApiError::unauthorized("Authentication required");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }
}
