//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::{User, ADMIN_USER_ID};
use crate::domain::value_objects::{AuthSession, Caller};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for registration, login, and profiles
///
/// The admin account is synthetic: its credentials come from configuration,
/// no row exists for it, and its tokens carry the sentinel nil user id.
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for issuing access tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for signing access tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Rejects an email that is already registered
    /// 2. Hashes the password with bcrypt
    /// 3. Persists the user with the `user` role
    /// 4. Issues an access token for the new account
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `email` - Login email, unique across accounts
    /// * `password` - Plaintext password, never stored
    /// * `phone` - Contact phone number
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Token, lifetime, and the stored user
    /// * `Err(DomainError)` - Email taken, or hashing/persistence failed
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> DomainResult<AuthSession> {
        if self.user_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailTaken));
        }

        let password_hash = bcrypt::hash(password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Password hashing failed: {e}")))?;

        let user = User::new(name, email, password_hash, phone);
        let created = self.user_repository.create(user).await?;

        let issued = self
            .token_service
            .issue_token(created.id, &created.email, created.role)?;

        tracing::info!(
            user_id = %created.id,
            event = "user_registered",
            "New user account registered"
        );

        Ok(AuthSession::new(issued.token, issued.expires_in, created))
    }

    /// Authenticate with email and password
    ///
    /// The configured admin pair is checked first and never touches storage;
    /// every other login is a stored-user lookup plus bcrypt verification.
    /// All mismatches collapse into a single `InvalidCredentials` error so
    /// the response does not reveal which part was wrong.
    ///
    /// # Arguments
    ///
    /// * `email` - Login email
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Token, lifetime, and the authenticated user
    /// * `Err(DomainError)` - Credentials rejected
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        if email == self.config.admin_email && password == self.config.admin_password {
            let admin = User::admin_profile(email);
            let issued = self
                .token_service
                .issue_token(admin.id, &admin.email, admin.role)?;

            tracing::info!(event = "admin_login", "Administrator logged in");

            return Ok(AuthSession::new(issued.token, issued.expires_in, admin));
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(format!("Password verification failed: {e}")))?;

        if !password_matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let issued = self
            .token_service
            .issue_token(user.id, &user.email, user.role)?;

        tracing::info!(
            user_id = %user.id,
            event = "user_login",
            "User logged in"
        );

        Ok(AuthSession::new(issued.token, issued.expires_in, user))
    }

    /// Fetch the caller's profile
    ///
    /// The sentinel admin has no stored row and gets a synthesized record.
    pub async fn profile(&self, caller: &Caller) -> DomainResult<User> {
        if caller.user_id == ADMIN_USER_ID {
            return Ok(User::admin_profile(&caller.email));
        }

        self.user_repository
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Update the caller's name and/or phone
    ///
    /// The sentinel admin row does not exist and cannot be updated.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        name: Option<String>,
        phone: Option<String>,
    ) -> DomainResult<User> {
        if caller.user_id == ADMIN_USER_ID {
            return Err(DomainError::forbidden("Admin profile cannot be updated"));
        }

        let mut user = self
            .user_repository
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.update_profile(name, phone);
        self.user_repository.update(user).await
    }
}
