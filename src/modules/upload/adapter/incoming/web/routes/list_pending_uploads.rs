use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::upload::application::domain::entities::UploadView;
use crate::AppState;

/// Pending uploads, oldest first
#[utoipa::path(
    get,
    path = "/api/admin/uploads",
    tag = "upload",
    responses(
        (status = 200, description = "Pending uploads", body = inline(SuccessResponse<Vec<UploadView>>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Administrator required", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/uploads")]
pub async fn list_pending_uploads_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.upload.list_pending.execute().await {
        Ok(uploads) => {
            ApiResponse::success(uploads.iter().map(UploadView::from).collect::<Vec<_>>())
        }
        Err(e) => {
            error!(error = %e, "Failed to list pending uploads");
            ApiResponse::internal_error()
        }
    }
}
