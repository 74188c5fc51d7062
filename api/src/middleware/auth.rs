//! JWT authentication middleware for protected endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the core `TokenService`, and injects an [`AuthContext`] into the
//! request extensions. Handlers receive the context through its `FromRequest`
//! impl; admin-only routes use [`AdminContext`] instead, which additionally
//! checks the role carried by the token.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use de_core::domain::entities::token::Claims;
use de_core::domain::entities::user::Role;
use de_core::domain::value_objects::Caller;
use de_core::errors::{DomainError, TokenError};
use de_core::services::TokenService;

use crate::handlers::ApiError;

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the token subject
    pub user_id: Uuid,
    /// Email address at the time of issue
    pub email: String,
    /// Role carried by the token
    pub role: Role,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    ///
    /// Fails when the subject does not parse as a UUID, which means the
    /// token was signed over malformed claims.
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims.user_id().ok_or(TokenError::Invalid)?;
        Ok(Self {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }

    /// The caller identity passed into domain services
    pub fn caller(&self) -> Caller {
        Caller::new(self.user_id, self.email.clone(), self.role)
    }

    /// Whether the token carries the admin role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// JWT authentication middleware factory
///
/// Cheap to clone; each protected route wraps its own clone.
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the middleware around the shared token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ApiError::unauthorized("Authentication required").into());
                }
            };

            let claims = match token_service.verify_token(&token) {
                Ok(claims) => claims,
                Err(_) => {
                    return Err(ApiError::unauthorized("Invalid or expired token").into());
                }
            };

            let auth_context = match AuthContext::from_claims(claims) {
                Ok(context) => context,
                Err(_) => {
                    return Err(ApiError::unauthorized("Invalid or expired token").into());
                }
            };

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for routes that require an authenticated caller
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required").into());

        ready(result)
    }
}

/// Extractor for routes restricted to the administrator
///
/// Requires [`JwtAuth`] to have run; rejects non-admin tokens with 403.
pub struct AdminContext(pub AuthContext);

impl FromRequest for AdminContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match req.extensions().get::<AuthContext>().cloned() {
            Some(context) if context.is_admin() => Ok(AdminContext(context)),
            Some(_) => Err(ApiError::forbidden("Admin access required").into()),
            None => Err(ApiError::unauthorized("Authentication required").into()),
        };

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use de_core::domain::entities::user::ADMIN_USER_ID;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_context_from_valid_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "jane@example.com", Role::User, 24);

        let context = AuthContext::from_claims(claims).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.email, "jane@example.com");
        assert!(!context.is_admin());

        let caller = context.caller();
        assert_eq!(caller.user_id, user_id);
        assert_eq!(caller.role, Role::User);
    }

    #[test]
    fn test_context_rejects_malformed_subject() {
        let mut claims = Claims::new(Uuid::new_v4(), "jane@example.com", Role::User, 24);
        claims.sub = "not-a-uuid".to_string();

        assert!(AuthContext::from_claims(claims).is_err());
    }

    #[test]
    fn test_admin_claims_produce_admin_context() {
        let claims = Claims::new(ADMIN_USER_ID, "admin@driveeasy.com", Role::Admin, 24);
        let context = AuthContext::from_claims(claims).unwrap();

        assert!(context.is_admin());
        assert!(context.caller().is_admin());
    }
}
