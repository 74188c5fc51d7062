//! Mock implementation of RentalRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::errors::DomainError;

use super::repository::RentalRepository;

/// Mock rental repository for testing
pub struct MockRentalRepository {
    rentals: Arc<RwLock<HashMap<Uuid, Rental>>>,
}

impl MockRentalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rentals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the mock with an existing rental
    pub async fn insert(&self, rental: Rental) {
        self.rentals.write().await.insert(rental.id, rental);
    }
}

impl Default for MockRentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn create(&self, rental: Rental) -> Result<Rental, DomainError> {
        let mut rentals = self.rentals.write().await;
        rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        Ok(rentals.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        let mut all: Vec<Rental> = rentals.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().await;
        let mut owned: Vec<Rental> = rentals
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut rentals = self.rentals.write().await;
        Ok(rentals.remove(&id).is_some())
    }
}
