use actix_multipart::Multipart;
use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, FileForm, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::{UserFileSlot, UserView};
use crate::auth::application::ports::incoming::use_cases::ReplaceUserFileError;
use crate::shared::api::multipart::{multipart_error_response, MultipartForm};
use crate::shared::api::{file_policy_error_response, ApiResponse};
use crate::AppState;

async fn replace_file(
    user: AuthenticatedUser,
    slot: UserFileSlot,
    payload: Multipart,
    data: &AppState,
) -> HttpResponse {
    let mut form =
        match MultipartForm::read(payload, "file", data.file_policy.max_file_size_bytes).await {
            Ok(form) => form,
            Err(e) => return multipart_error_response(&e),
        };

    let Some(file) = form.take_file() else {
        return ApiResponse::bad_request("FILE_REQUIRED", "A file is required");
    };

    match data.auth.replace_file.execute(user.id(), slot, file).await {
        Ok(updated) => {
            info!(user_id = %user.user_id, ?slot, "User file replaced");
            ApiResponse::success(UserView::from(updated))
        }
        Err(ReplaceUserFileError::InvalidFile(e)) => file_policy_error_response(&e),
        Err(ReplaceUserFileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ReplaceUserFileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to replace user file");
            ApiResponse::internal_error()
        }
    }
}

/// Replace own credential file
#[utoipa::path(
    put,
    path = "/api/users/me/credential",
    tag = "profile",
    request_body(content = inline(FileForm), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated record", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[put("/api/users/me/credential")]
pub async fn replace_credential_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    replace_file(user, UserFileSlot::Credential, payload, &data).await
}

/// Replace own profile picture
#[utoipa::path(
    put,
    path = "/api/users/me/picture",
    tag = "profile",
    request_body(content = inline(FileForm), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated record", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[put("/api/users/me/picture")]
pub async fn replace_picture_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    replace_file(user, UserFileSlot::ProfilePicture, payload, &data).await
}
