//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling;
//! the concrete MySQL implementation lives in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Email
/// uniqueness is enforced here so registration can surface a stable error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use de_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    ///
    /// if let Some(user) = repo.find_by_id(user_id).await? {
    ///     println!("User role: {:?}", user.role);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    ///
    /// Lookup is an exact match on the stored value.
    ///
    /// # Arguments
    /// * `email` - The email address to search for
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use de_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("jane@example.com").await? {
    ///     Some(user) => println!("User found: {}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    ///
    /// # Example
    /// ```no_run
    /// # use de_core::repositories::UserRepository;
    /// # use de_core::domain::entities::user::User;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let new_user = User::new("Jane Doe", "jane@example.com", "bcrypt_hash", "0412345678");
    ///
    /// let created = repo.create(new_user).await?;
    /// println!("Created user with ID: {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity with updated fields
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError)` - Update failed (e.g. user not found)
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use de_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    ///
    /// if let Some(mut user) = repo.find_by_id(user_id).await? {
    ///     user.update_profile(Some("Jane D.".to_string()), None);
    ///     let updated = repo.update(user).await?;
    ///     println!("User updated at: {}", updated.updated_at);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check if a user exists with the given email address
    ///
    /// # Arguments
    /// * `email` - The email address to check
    ///
    /// # Returns
    /// * `Ok(true)` - A user is registered with this email
    /// * `Ok(false)` - Email is free
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use de_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// if repo.exists_by_email("jane@example.com").await? {
    ///     println!("Email already registered");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
