//! Tests for the analytics service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::Role;
use crate::domain::value_objects::reports::{
    CarAvailability, CarPerformance, CategoryPopularity, RatingEntry, RentalStatistics,
    UserReviewStats,
};
use crate::domain::value_objects::Caller;
use crate::errors::DomainError;
use crate::repositories::MockAnalyticsRepository;
use crate::services::analytics::AnalyticsService;

fn test_service() -> (Arc<MockAnalyticsRepository>, AnalyticsService<MockAnalyticsRepository>) {
    let repo = Arc::new(MockAnalyticsRepository::new());
    let service = AnalyticsService::new(Arc::clone(&repo));
    (repo, service)
}

fn user_caller() -> Caller {
    Caller::new(Uuid::new_v4(), "jane@example.com", Role::User)
}

fn admin_caller() -> Caller {
    Caller::new(Uuid::nil(), "admin@driveeasy.com", Role::Admin)
}

#[tokio::test]
async fn test_rental_statistics_returns_repository_rows() {
    let (repo, service) = test_service();
    repo.set_rental_statistics(vec![RentalStatistics {
        car_id: Uuid::new_v4(),
        car_name: "Aston Martin DB11".to_string(),
        category: "Luxury".to_string(),
        total_rentals: 4,
        total_revenue: 3200.0,
        average_rental_duration: 3.5,
    }])
    .await;

    let stats = service
        .rental_statistics(
            &admin_caller(),
            Some("2026-01-01"),
            Some("2026-06-30"),
            Some("Luxury"),
        )
        .await
        .unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_revenue, 3200.0);
}

#[tokio::test]
async fn test_rental_statistics_requires_admin() {
    let (_repo, service) = test_service();

    let err = service
        .rental_statistics(
            &user_caller(),
            Some("2026-01-01"),
            Some("2026-06-30"),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
    assert_eq!(err.to_string(), "Admin access required");
}

#[tokio::test]
async fn test_rental_statistics_requires_both_dates() {
    let (_repo, service) = test_service();

    for (start, end) in [
        (None, Some("2026-06-30")),
        (Some("2026-01-01"), None),
        (None, None),
        (Some("  "), Some("2026-06-30")),
    ] {
        let err = service
            .rental_statistics(&admin_caller(), start, end, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Start date and end date are required");
    }
}

#[tokio::test]
async fn test_rental_statistics_rejects_malformed_dates() {
    let (_repo, service) = test_service();

    let err = service
        .rental_statistics(&admin_caller(), Some("June 1"), Some("2026-06-30"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(err.to_string(), "Invalid date format");

    let err = service
        .rental_statistics(
            &admin_caller(),
            Some("2026-01-01"),
            Some("30/06/2026"),
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid date format");
}

#[tokio::test]
async fn test_history_allows_self_and_admin() {
    let (_repo, service) = test_service();
    let caller = user_caller();

    assert!(service
        .user_rental_history(&caller, caller.user_id)
        .await
        .unwrap()
        .is_empty());
    assert!(service
        .user_rental_history(&admin_caller(), caller.user_id)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_history_rejects_other_users() {
    let (_repo, service) = test_service();

    let err = service
        .user_rental_history(&user_caller(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
    assert_eq!(err.to_string(), "Not authorized to access this data");
}

#[tokio::test]
async fn test_availability_empty_window_is_all_zeroes() {
    let (_repo, service) = test_service();

    let availability = service
        .car_availability(
            &admin_caller(),
            Uuid::new_v4(),
            Some("2026-01-01"),
            Some("2026-01-31"),
        )
        .await
        .unwrap();

    assert_eq!(availability, CarAvailability::empty());
}

#[tokio::test]
async fn test_availability_returns_preset_result() {
    let (repo, service) = test_service();
    let car_id = Uuid::new_v4();
    repo.set_availability(
        car_id,
        CarAvailability {
            total_rentals: 3,
            total_days: 9,
            average_rental_duration: 3.0,
        },
    )
    .await;

    let availability = service
        .car_availability(
            &admin_caller(),
            car_id,
            Some("2026-01-01"),
            Some("2026-01-31"),
        )
        .await
        .unwrap();
    assert_eq!(availability.total_rentals, 3);
    assert_eq!(availability.total_days, 9);
}

#[tokio::test]
async fn test_availability_requires_admin_and_dates() {
    let (_repo, service) = test_service();

    let err = service
        .car_availability(
            &user_caller(),
            Uuid::new_v4(),
            Some("2026-01-01"),
            Some("2026-01-31"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Admin access required");

    let err = service
        .car_availability(&admin_caller(), Uuid::new_v4(), None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Start date and end date are required");
}

#[tokio::test]
async fn test_category_popularity_is_public() {
    let (repo, service) = test_service();
    repo.set_categories(vec![CategoryPopularity {
        category: "SUV".to_string(),
        total_cars: 5,
        total_rentals: 12,
        average_price: 180.0,
    }])
    .await;

    // No caller at all: the summary is readable without authentication
    let categories = service.category_popularity().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category, "SUV");
}

#[tokio::test]
async fn test_review_stats_allows_self_rejects_others() {
    let (repo, service) = test_service();
    let caller = user_caller();
    repo.set_review_stats(
        caller.user_id,
        UserReviewStats {
            total_reviews: 2,
            average_rating: 4.5,
            rating_distribution: vec![RatingEntry {
                rating: 5,
                title: "Great car".to_string(),
                car_id: Uuid::new_v4(),
            }],
        },
    )
    .await;

    let stats = service
        .user_review_stats(&caller, caller.user_id)
        .await
        .unwrap();
    assert_eq!(stats.total_reviews, 2);

    let err = service
        .user_review_stats(&user_caller(), caller.user_id)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not authorized to access this data");
}

#[tokio::test]
async fn test_review_stats_for_quiet_user_is_empty() {
    let (_repo, service) = test_service();
    let caller = user_caller();

    let stats = service
        .user_review_stats(&caller, caller.user_id)
        .await
        .unwrap();
    assert_eq!(stats, UserReviewStats::empty());
}

#[tokio::test]
async fn test_performance_is_admin_only() {
    let (repo, service) = test_service();
    let car_id = Uuid::new_v4();
    repo.set_performance(
        car_id,
        CarPerformance {
            total_rentals: 10,
            total_revenue: 7500.0,
            average_rating: 4.2,
            utilization_rate: 0.2,
        },
    )
    .await;

    let metrics = service
        .car_performance(&admin_caller(), car_id)
        .await
        .unwrap();
    assert_eq!(metrics.total_rentals, 10);

    let err = service
        .car_performance(&user_caller(), car_id)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Admin access required");
}
