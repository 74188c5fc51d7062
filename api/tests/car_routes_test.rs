//! Integration tests for the car catalog and fleet-management endpoints.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;
use uuid::Uuid;

use common::{bearer, sample_car, TestContext};
use de_api::app::create_app;
use de_core::domain::entities::CarStatus;

fn create_payload() -> serde_json::Value {
    json!({
        "name": "Mustang GT",
        "type": "Coupe",
        "category": "Muscle",
        "pricePerDay": 150.0,
        "seats": 4,
        "features": ["V8", "Launch control"],
        "imageUrl": "https://cdn.driveeasy.test/mustang.jpg"
    })
}

#[actix_web::test]
async fn test_list_cars_empty_catalog() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/cars").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_list_cars_returns_catalog_with_count() {
    let ctx = TestContext::new();
    ctx.cars.insert(sample_car("Aston Martin DB11", "Luxury", 225.0)).await;
    ctx.cars.insert(sample_car("Huracan Evo", "Supercar", 450.0)).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/cars").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 2);
    let first = &body["data"][0];
    assert!(first.get("pricePerDay").is_some());
    assert!(first.get("type").is_some());
    assert!(first.get("price_per_day").is_none());
}

#[actix_web::test]
async fn test_list_cars_filters_by_category() {
    let ctx = TestContext::new();
    ctx.cars.insert(sample_car("Aston Martin DB11", "Luxury", 225.0)).await;
    ctx.cars.insert(sample_car("Huracan Evo", "Supercar", 450.0)).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/cars?category=Luxury")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Aston Martin DB11");
}

#[actix_web::test]
async fn test_list_cars_filters_by_status() {
    let ctx = TestContext::new();
    let mut rented = sample_car("Aston Martin DB11", "Luxury", 225.0);
    rented.status = CarStatus::Rented;
    ctx.cars.insert(rented).await;
    ctx.cars.insert(sample_car("Huracan Evo", "Supercar", 450.0)).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/cars?status=rented")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["status"], "rented");
}

#[actix_web::test]
async fn test_list_cars_rejects_unknown_status() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/cars?status=scrapped")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid car status");
}

#[actix_web::test]
async fn test_car_detail_returns_car() {
    let ctx = TestContext::new();
    let car = sample_car("Aston Martin DB11", "Luxury", 225.0);
    let car_id = car.id;
    ctx.cars.insert(car).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/cars/{car_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Aston Martin DB11");
    assert_eq!(body["data"]["id"], car_id.to_string());
}

#[actix_web::test]
async fn test_car_detail_unknown_id_is_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/cars/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car not found");
}

#[actix_web::test]
async fn test_car_detail_malformed_id_is_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/cars/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car not found");
}

#[actix_web::test]
async fn test_create_car_requires_authentication() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars")
        .set_json(create_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_car_rejects_non_admin() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars")
        .insert_header(bearer(&token))
        .set_json(create_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin access required");
}

#[actix_web::test]
async fn test_create_car_as_admin() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars")
        .insert_header(bearer(&token))
        .set_json(create_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car added successfully");
    assert_eq!(body["data"]["name"], "Mustang GT");
    assert_eq!(body["data"]["type"], "Coupe");
    assert_eq!(body["data"]["status"], "available");

    let list = test::TestRequest::get().uri("/api/cars").to_request();
    let listed: serde_json::Value =
        test::read_body_json(test::call_service(&app, list).await).await;
    assert_eq!(listed["count"], 1);
}

#[actix_web::test]
async fn test_create_car_rejects_unknown_category() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = create_payload();
    payload["category"] = json!("Tractor");
    let req = test::TestRequest::post()
        .uri("/api/cars")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid car category");
}

#[actix_web::test]
async fn test_create_car_requires_an_image_reference() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut payload = create_payload();
    payload.as_object_mut().unwrap().remove("imageUrl");
    let req = test::TestRequest::post()
        .uri("/api/cars")
        .insert_header(bearer(&token))
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Either imageUrl or imageData must be provided");
}

#[actix_web::test]
async fn test_update_car_as_admin() {
    let ctx = TestContext::new();
    let car = sample_car("Aston Martin DB11", "Luxury", 225.0);
    let car_id = car.id;
    ctx.cars.insert(car).await;
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/cars/{car_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "pricePerDay": 199.0, "status": "maintenance" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car updated successfully");
    assert_eq!(body["data"]["pricePerDay"], 199.0);
    assert_eq!(body["data"]["status"], "maintenance");
}

#[actix_web::test]
async fn test_update_car_unknown_id_is_404() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/cars/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .set_json(json!({ "pricePerDay": 199.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car not found");
}

#[actix_web::test]
async fn test_delete_car_as_admin() {
    let ctx = TestContext::new();
    let car = sample_car("Aston Martin DB11", "Luxury", 225.0);
    let car_id = car.id;
    ctx.cars.insert(car).await;
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cars/{car_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Car deleted successfully");
    assert!(body.get("data").is_none());

    let detail = test::TestRequest::get()
        .uri(&format!("/api/cars/{car_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, detail).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_delete_car_rejects_non_admin() {
    let ctx = TestContext::new();
    let car = sample_car("Aston Martin DB11", "Luxury", 225.0);
    let car_id = car.id;
    ctx.cars.insert(car).await;
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cars/{car_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_upload_batch_reports_each_item() {
    let ctx = TestContext::new();
    let car = sample_car("Aston Martin DB11", "Luxury", 225.0);
    let car_id = car.id;
    ctx.cars.insert(car).await;
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars/upload-batch")
        .insert_header(bearer(&token))
        .set_json(json!({
            "carImages": [
                { "carId": car_id.to_string(), "imageData": "data:image/png;base64,aGk=" },
                { "carId": Uuid::new_v4().to_string(), "imageData": "data:image/png;base64,aGk=" },
                { "imageData": "data:image/png;base64,aGk=" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("data").is_none());

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["success"], true);
    assert_eq!(results[0]["message"], "Image updated successfully");
    assert_eq!(results[1]["success"], false);
    assert_eq!(results[1]["message"], "Car not found");
    assert_eq!(results[2]["success"], false);
    assert_eq!(results[2]["message"], "Missing required fields");

    let detail = test::TestRequest::get()
        .uri(&format!("/api/cars/{car_id}"))
        .to_request();
    let fetched: serde_json::Value =
        test::read_body_json(test::call_service(&app, detail).await).await;
    assert_eq!(fetched["data"]["imageData"], "data:image/png;base64,aGk=");
}

#[actix_web::test]
async fn test_upload_batch_rejects_non_array_payload() {
    let ctx = TestContext::new();
    let token = ctx.admin_token();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars/upload-batch")
        .insert_header(bearer(&token))
        .set_json(json!({ "carImages": { "carId": "abc" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Invalid data format. Expected array of car images"
    );
}

#[actix_web::test]
async fn test_upload_batch_rejects_non_admin() {
    let ctx = TestContext::new();
    let token = ctx.user_token(Uuid::new_v4(), "jane@example.com");
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/cars/upload-batch")
        .insert_header(bearer(&token))
        .set_json(json!({ "carImages": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin access required");
}
