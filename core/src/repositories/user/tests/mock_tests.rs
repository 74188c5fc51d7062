//! Unit tests for mock user repository

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();

    let user = User::new("Jane Doe", "jane@example.com", "hash", "0412345678");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let found = repo.find_by_id(user.id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().email, "jane@example.com");
}

#[tokio::test]
async fn test_mock_repository_find_by_email() {
    let repo = MockUserRepository::new();

    let user = User::new("Jane Doe", "jane@example.com", "hash", "0412345678");
    repo.create(user.clone()).await.unwrap();

    let found = repo.find_by_email("jane@example.com").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    let missing = repo.find_by_email("nobody@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();

    let first = User::new("Jane Doe", "jane@example.com", "hash", "0412345678");
    let second = User::new("Other Jane", "jane@example.com", "hash2", "0498765432");

    repo.create(first).await.unwrap();
    let result = repo.create(second).await;

    assert!(matches!(result.unwrap_err(), DomainError::Duplicate { .. }));
}

#[tokio::test]
async fn test_mock_repository_update() {
    let repo = MockUserRepository::new();

    let mut user = User::new("Jane Doe", "jane@example.com", "hash", "0412345678");
    repo.create(user.clone()).await.unwrap();

    user.update_profile(Some("Jane Updated".to_string()), Some("0400000000".to_string()));

    let updated = repo.update(user).await.unwrap();
    assert_eq!(updated.name, "Jane Updated");
    assert_eq!(updated.phone, "0400000000");
}

#[tokio::test]
async fn test_mock_repository_update_missing_user() {
    let repo = MockUserRepository::new();

    let user = User::new("Ghost", "ghost@example.com", "hash", "0412345678");
    let result = repo.update(user).await;

    assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_mock_repository_exists_by_email() {
    let repo = MockUserRepository::new();

    assert!(!repo.exists_by_email("jane@example.com").await.unwrap());

    let user = User::new("Jane Doe", "jane@example.com", "hash", "0412345678");
    repo.create(user).await.unwrap();

    assert!(repo.exists_by_email("jane@example.com").await.unwrap());
}

#[tokio::test]
async fn test_mock_repository_find_by_unknown_id() {
    let repo = MockUserRepository::new();
    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}
