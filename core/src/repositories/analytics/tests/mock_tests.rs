//! Unit tests for mock analytics repository

use chrono::NaiveDate;
use uuid::Uuid;

use de_shared::types::DateRange;

use crate::domain::value_objects::reports::{CarAvailability, RentalStatistics};
use crate::repositories::analytics::{AnalyticsRepository, MockAnalyticsRepository};

fn sample_range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    )
}

#[tokio::test]
async fn test_mock_repository_replays_rental_statistics() {
    let repo = MockAnalyticsRepository::new();

    repo.set_rental_statistics(vec![RentalStatistics {
        car_id: Uuid::new_v4(),
        car_name: "Ferrari Roma".to_string(),
        category: "Sports".to_string(),
        total_rentals: 3,
        total_revenue: 2700.0,
        average_rental_duration: 3.0,
    }])
    .await;

    let stats = repo.rental_statistics(sample_range(), None).await.unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_revenue, 2700.0);
}

#[tokio::test]
async fn test_mock_repository_defaults_to_zeroes() {
    let repo = MockAnalyticsRepository::new();

    let availability = repo
        .car_availability(Uuid::new_v4(), sample_range())
        .await
        .unwrap();
    assert_eq!(availability, CarAvailability::empty());

    let review_stats = repo.user_review_stats(Uuid::new_v4()).await.unwrap();
    assert_eq!(review_stats.total_reviews, 0);

    let history = repo.user_rental_history(Uuid::new_v4()).await.unwrap();
    assert!(history.is_empty());

    let performance = repo.car_performance(Uuid::new_v4()).await.unwrap();
    assert_eq!(performance.total_rentals, 0);
}

#[tokio::test]
async fn test_mock_repository_scopes_canned_data_by_id() {
    let repo = MockAnalyticsRepository::new();

    let car_id = Uuid::new_v4();
    repo.set_availability(
        car_id,
        CarAvailability {
            total_rentals: 2,
            total_days: 7,
            average_rental_duration: 3.5,
        },
    )
    .await;

    let hit = repo.car_availability(car_id, sample_range()).await.unwrap();
    assert_eq!(hit.total_rentals, 2);

    let miss = repo
        .car_availability(Uuid::new_v4(), sample_range())
        .await
        .unwrap();
    assert_eq!(miss.total_rentals, 0);
}
