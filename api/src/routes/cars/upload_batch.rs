use actix_web::{web, HttpResponse};

use crate::dto::car::{
    BatchImageUploadRequest, BatchImageUploadResponse, CarImageItem, ImageUploadResult,
};
use crate::handlers::domain_error_response;
use crate::middleware::AdminContext;
use crate::routes::AppState;

use de_core::repositories::{
    AnalyticsRepository, CarRepository, RentalRepository, ReviewRepository, UserRepository,
};
use de_core::services::ImageAttachment;
use de_shared::types::ApiResponse;

/// Handler for POST /api/cars/upload-batch
///
/// Admin only. Attaches base64 image payloads to existing cars in one call.
/// The batch never fails as a whole: each entry reports its own outcome, and
/// a malformed entry becomes a per-item failure.
///
/// # Request Body
///
/// ```json
/// { "carImages": [ { "carId": "...", "imageData": "data:image/..." } ] }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "results": [ { "carId": "...", "success": true, "message": "..." } ] }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `carImages` missing or not an array
pub async fn upload_batch<U, C, R, V, A>(
    state: web::Data<AppState<U, C, R, V, A>>,
    admin: AdminContext,
    request: web::Json<BatchImageUploadRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CarRepository + 'static,
    R: RentalRepository + 'static,
    V: ReviewRepository + 'static,
    A: AnalyticsRepository + 'static,
{
    let items = match request.into_inner().car_images {
        Some(serde_json::Value::Array(items)) => items,
        _ => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
                "Invalid data format. Expected array of car images",
            ))
        }
    };

    let attachments: Vec<ImageAttachment> = items
        .into_iter()
        .map(|item| {
            // A non-object entry degrades to an empty item and is reported
            // as a per-item failure by the service.
            let item: CarImageItem = serde_json::from_value(item).unwrap_or_default();
            ImageAttachment {
                car_id: item.car_id,
                image_data: item.image_data,
            }
        })
        .collect();

    match state
        .catalog_service
        .attach_images(&admin.0.caller(), attachments)
        .await
    {
        Ok(results) => HttpResponse::Ok().json(BatchImageUploadResponse {
            success: true,
            results: results.into_iter().map(ImageUploadResult::from).collect(),
        }),
        Err(error) => domain_error_response(&error),
    }
}
