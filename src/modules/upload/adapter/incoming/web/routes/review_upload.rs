use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::upload::application::domain::entities::UploadView;
use crate::upload::application::ports::incoming::use_cases::{
    LinkUploadOwnerError, ReviewUploadError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUploadRequest {
    #[schema(example = "approved")]
    pub status: String,
    /// Links the upload to this user before the status change
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkUploadOwnerRequest {
    pub user_id: Uuid,
}

/// Review an upload
///
/// Status, the upload's verification flag and its owner's verification flag
/// change together or not at all.
#[utoipa::path(
    patch,
    path = "/api/upload/{id}",
    tag = "upload",
    params(("id" = Uuid, Path, description = "Upload ID")),
    request_body = ReviewUploadRequest,
    responses(
        (status = 200, description = "Reviewed upload", body = inline(SuccessResponse<UploadView>)),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "Upload or user not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/upload/{id}")]
pub async fn review_upload_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewUploadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let upload_id = path.into_inner();
    let req = req.into_inner();

    match data
        .upload
        .review
        .execute(upload_id, &req.status, req.user_id.map(UserId::from))
        .await
    {
        Ok(upload) => {
            info!(%upload_id, admin_id = %admin.user_id, status = %upload.status, "Upload reviewed");
            ApiResponse::success(UploadView::from(upload))
        }
        Err(e @ ReviewUploadError::InvalidStatus(_)) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }
        Err(ReviewUploadError::UploadNotFound) => {
            ApiResponse::not_found("UPLOAD_NOT_FOUND", "Upload not found")
        }
        Err(ReviewUploadError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ReviewUploadError::RepositoryError(e)) => {
            error!(%upload_id, error = %e, "Failed to review upload");
            ApiResponse::internal_error()
        }
    }
}

/// Link an upload to a user
#[utoipa::path(
    patch,
    path = "/api/upload/{id}/owner",
    tag = "upload",
    params(("id" = Uuid, Path, description = "Upload ID")),
    request_body = LinkUploadOwnerRequest,
    responses(
        (status = 200, description = "Linked upload", body = inline(SuccessResponse<UploadView>)),
        (status = 404, description = "Upload or user not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/upload/{id}/owner")]
pub async fn link_upload_owner_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<LinkUploadOwnerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let upload_id = path.into_inner();

    match data
        .upload
        .link_owner
        .execute(upload_id, UserId::from(req.user_id))
        .await
    {
        Ok(upload) => ApiResponse::success(UploadView::from(upload)),
        Err(LinkUploadOwnerError::UploadNotFound) => {
            ApiResponse::not_found("UPLOAD_NOT_FOUND", "Upload not found")
        }
        Err(LinkUploadOwnerError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(LinkUploadOwnerError::RepositoryError(e)) => {
            error!(%upload_id, error = %e, "Failed to link upload owner");
            ApiResponse::internal_error()
        }
    }
}
