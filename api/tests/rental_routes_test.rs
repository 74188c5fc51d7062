//! Integration tests for the rental booking endpoints.

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use common::{bearer, sample_rental, TestContext};
use de_api::app::create_app;

/// Three-day booking at 125.0/day starting a month from now
fn booking_payload(car_id: Uuid) -> serde_json::Value {
    let pickup = Utc::now().date_naive() + Duration::days(30);
    let ret = pickup + Duration::days(3);
    json!({
        "carId": car_id.to_string(),
        "carName": "Aston Martin DB11",
        "pricePerDay": 125.0,
        "totalPrice": 375.0,
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555-0100",
        "pickupDate": pickup.format("%Y-%m-%d").to_string(),
        "returnDate": ret.format("%Y-%m-%d").to_string(),
        "pickupLocation": "Downtown",
        "returnLocation": "Airport",
        "additionalDrivers": 1,
        "insurance": true
    })
}

#[actix_web::test]
async fn test_create_rental_requires_authentication() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .set_json(booking_payload(Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Authentication required");
}

#[actix_web::test]
async fn test_create_rental_stores_submitted_total() {
    let ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let token = ctx.user_token(user_id, "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(booking_payload(Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Rental created successfully");
    // The total is stored exactly as submitted, never recomputed
    assert_eq!(body["data"]["totalPrice"], 375.0);
    assert_eq!(body["data"]["pricePerDay"], 125.0);
    assert_eq!(body["data"]["userId"], user_id.to_string());
    assert_eq!(body["data"]["additionalDrivers"], 1);
    assert_eq!(body["data"]["insurance"], true);
}

#[actix_web::test]
async fn test_create_rental_rejects_missing_car_id() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = booking_payload(Uuid::new_v4());
    payload.as_object_mut().unwrap().remove("carId");
    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car ID is required");
}

#[actix_web::test]
async fn test_create_rental_rejects_invalid_email() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = booking_payload(Uuid::new_v4());
    payload["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email format");
}

#[actix_web::test]
async fn test_create_rental_rejects_past_pickup_date() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = booking_payload(Uuid::new_v4());
    payload["pickupDate"] = json!("2020-01-01");
    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Pickup date cannot be in the past");
}

#[actix_web::test]
async fn test_create_rental_rejects_return_before_pickup() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let pickup = Utc::now().date_naive() + Duration::days(30);
    let mut payload = booking_payload(Uuid::new_v4());
    payload["returnDate"] = json!(pickup.format("%Y-%m-%d").to_string());
    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Return date must be after pickup date");
}

#[actix_web::test]
async fn test_create_rental_rejects_too_many_drivers() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = booking_payload(Uuid::new_v4());
    payload["additionalDrivers"] = json!(4);
    let req = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Additional drivers must be between 0 and 3");
}

#[actix_web::test]
async fn test_overlapping_bookings_are_both_accepted() {
    let ctx = TestContext::new();
    let car_id = Uuid::new_v4();
    let first_token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let second_token = ctx.user_token(Uuid::new_v4(), "john@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let first = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&first_token))
        .set_json(booking_payload(car_id))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    // Same car, same window; no exclusion check exists
    let second = test::TestRequest::post()
        .uri("/api/rentals")
        .insert_header(bearer(&second_token))
        .set_json(booking_payload(car_id))
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::CREATED
    );
}

#[actix_web::test]
async fn test_list_all_rentals_is_admin_only() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin access required");
}

#[actix_web::test]
async fn test_list_all_rentals_as_admin() {
    let ctx = TestContext::new();
    ctx.rentals
        .insert(sample_rental(Uuid::new_v4(), Uuid::new_v4()))
        .await;
    ctx.rentals
        .insert(sample_rental(Uuid::new_v4(), Uuid::new_v4()))
        .await;
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/rentals")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 2);
    assert!(body["data"][0].get("pickupDate").is_some());
}

#[actix_web::test]
async fn test_list_own_rentals_scopes_to_caller() {
    let ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    ctx.rentals.insert(sample_rental(user_id, Uuid::new_v4())).await;
    ctx.rentals
        .insert(sample_rental(Uuid::new_v4(), Uuid::new_v4()))
        .await;
    let token = ctx.user_token(user_id, "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/rentals/user")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["userId"], user_id.to_string());
}

#[actix_web::test]
async fn test_delete_rental_as_admin() {
    let ctx = TestContext::new();
    let rental = sample_rental(Uuid::new_v4(), Uuid::new_v4());
    let rental_id = rental.id;
    ctx.rentals.insert(rental).await;
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rentals/{rental_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Rental deleted successfully");
}

#[actix_web::test]
async fn test_delete_rental_rejects_owner_without_admin_role() {
    let ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let rental = sample_rental(user_id, Uuid::new_v4());
    let rental_id = rental.id;
    ctx.rentals.insert(rental).await;
    let token = ctx.user_token(user_id, "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rentals/{rental_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_delete_rental_unknown_id_is_404() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rentals/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Rental not found");
}

#[actix_web::test]
async fn test_delete_rental_malformed_id_is_404() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri("/api/rentals/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Rental not found");
}
