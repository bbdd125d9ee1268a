use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::{User, UserFileSlot, UserId, UserView};
use crate::auth::application::ports::incoming::use_cases::GetUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn load_user(data: &AppState, user_id: Uuid) -> Result<User, HttpResponse> {
    match data.auth.get.execute(UserId::from(user_id)).await {
        Ok(user) => Ok(user),
        Err(GetUserError::NotFound) => {
            Err(ApiResponse::not_found("USER_NOT_FOUND", "User not found"))
        }
        Err(GetUserError::RepositoryError(e)) => {
            error!(%user_id, error = %e, "Failed to load user");
            Err(ApiResponse::internal_error())
        }
    }
}

/// Single user record
#[utoipa::path(
    get,
    path = "/api/admin/user/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserView>)),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/user/{id}")]
pub async fn get_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match load_user(&data, path.into_inner()).await {
        Ok(user) => ApiResponse::success(UserView::from(user)),
        Err(resp) => resp,
    }
}

/// Download a user's credential file
#[utoipa::path(
    get,
    path = "/api/admin/user/{id}/file",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Raw file with its stored content type", content_type = "application/octet-stream"),
        (status = 404, description = "User or file not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/user/{id}/file")]
pub async fn download_user_credential_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match load_user(&data, path.into_inner()).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match user.file(UserFileSlot::Credential) {
        Some(file) => ApiResponse::attachment(&file.filename, &file.content_type, file.data.clone()),
        None => ApiResponse::not_found("FILE_NOT_FOUND", "User has no credential file"),
    }
}
