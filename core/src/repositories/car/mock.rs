//! Mock implementation of CarRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::car::{Car, CarStatus};
use crate::errors::DomainError;

use super::repository::CarRepository;

/// Mock car repository for testing
pub struct MockCarRepository {
    cars: Arc<RwLock<HashMap<Uuid, Car>>>,
}

impl MockCarRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the mock with an existing car
    pub async fn insert(&self, car: Car) {
        self.cars.write().await.insert(car.id, car);
    }
}

impl Default for MockCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn find_filtered(
        &self,
        category: Option<&str>,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().await;
        let mut matched: Vec<Car> = cars
            .values()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().await;
        Ok(cars.get(&id).cloned())
    }

    async fn create(&self, car: Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().await;
        cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn update(&self, car: Car) -> Result<Car, DomainError> {
        let mut cars = self.cars.write().await;

        if !cars.contains_key(&car.id) {
            return Err(DomainError::not_found("Car"));
        }

        cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut cars = self.cars.write().await;
        Ok(cars.remove(&id).is_some())
    }
}
