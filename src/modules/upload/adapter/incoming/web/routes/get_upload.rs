use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::upload::application::domain::entities::{Upload, UploadView};
use crate::upload::application::ports::incoming::use_cases::GetUploadError;
use crate::AppState;

async fn load(data: &AppState, id: Uuid) -> Result<Upload, HttpResponse> {
    data.upload.get.execute(id).await.map_err(|e| match e {
        GetUploadError::NotFound => ApiResponse::not_found("UPLOAD_NOT_FOUND", "Upload not found"),
        GetUploadError::RepositoryError(e) => {
            error!(upload_id = %id, error = %e, "Failed to load upload");
            ApiResponse::internal_error()
        }
    })
}

/// Upload metadata
#[utoipa::path(
    get,
    path = "/api/upload/{id}",
    tag = "upload",
    params(("id" = Uuid, Path, description = "Upload ID")),
    responses(
        (status = 200, description = "Upload found", body = inline(SuccessResponse<UploadView>)),
        (status = 404, description = "Upload not found", body = ErrorResponse),
    )
)]
#[get("/api/upload/{id}")]
pub async fn get_upload_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match load(&data, path.into_inner()).await {
        Ok(upload) => ApiResponse::success(UploadView::from(upload)),
        Err(resp) => resp,
    }
}

/// Download an uploaded file
#[utoipa::path(
    get,
    path = "/api/upload/download/{id}",
    tag = "upload",
    params(("id" = Uuid, Path, description = "Upload ID")),
    responses(
        (status = 200, description = "Raw file with its stored content type", content_type = "application/octet-stream"),
        (status = 404, description = "Upload not found", body = ErrorResponse),
    )
)]
#[get("/api/upload/download/{id}")]
pub async fn download_upload_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match load(&data, path.into_inner()).await {
        Ok(upload) => ApiResponse::attachment(
            &upload.file.filename,
            &upload.file.content_type,
            upload.file.data,
        ),
        Err(resp) => resp,
    }
}
