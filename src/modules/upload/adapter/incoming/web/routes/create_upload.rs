use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse, UploadForm};
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::multipart::{multipart_error_response, MultipartForm};
use crate::shared::api::{file_policy_error_response, ApiResponse};
use crate::upload::application::domain::entities::UploadView;
use crate::upload::application::ports::incoming::use_cases::CreateUploadError;
use crate::AppState;

/// Upload a document
///
/// The upload starts `pending`. `userId`, when present, links it to an existing user.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(UploadForm), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Upload stored", body = inline(SuccessResponse<UploadView>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse),
    )
)]
#[post("/api/upload")]
pub async fn create_upload_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form =
        match MultipartForm::read(payload, "file", data.file_policy.max_file_size_bytes).await {
            Ok(form) => form,
            Err(e) => return multipart_error_response(&e),
        };

    let owner = match form.text("userId").map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(UserId::from(id)),
            Err(_) => {
                return ApiResponse::bad_request("VALIDATION_ERROR", "userId must be a UUID")
            }
        },
    };

    let Some(file) = form.take_file() else {
        return ApiResponse::bad_request("FILE_REQUIRED", "A file is required");
    };

    match data.upload.create.execute(file, owner).await {
        Ok(upload) => {
            info!(upload_id = %upload.id, "Upload received");
            ApiResponse::created(UploadView::from(upload))
        }
        Err(CreateUploadError::InvalidFile(e)) => file_policy_error_response(&e),
        Err(CreateUploadError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreateUploadError::RepositoryError(e)) => {
            error!(error = %e, "Failed to store upload");
            ApiResponse::internal_error()
        }
    }
}
