use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{CredentialForm, ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::RegisterUserError;
use crate::shared::api::multipart::{multipart_error_response, MultipartForm};
use crate::shared::api::{credential_error_response, ApiResponse};
use crate::shared::domain::CredentialSubmission;
use crate::AppState;

/// Citizen registration
///
/// Stores a pending, unverified account together with its identity document.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body(content = inline(CredentialForm), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Registered, awaiting review", body = inline(SuccessResponse<UserView>)),
        (
            status = 400,
            description = "Missing or invalid file, or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "FILE_REQUIRED", "message": "A credential file is required" }
            })
        ),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/register")]
pub async fn register_user_handler(payload: Multipart, data: web::Data<AppState>) -> impl Responder {
    let mut form =
        match MultipartForm::read(payload, "file", data.file_policy.max_file_size_bytes).await {
            Ok(form) => form,
            Err(e) => {
                warn!(error = %e, "Rejected registration body");
                return multipart_error_response(&e);
            }
        };

    let submission = CredentialSubmission {
        name: form.text_or_empty("name"),
        email: form.text_or_empty("email"),
        password: form.text_or_empty("password"),
        file: form.take_file(),
    };

    match data.auth.register.execute(submission).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(UserView::from(user))
        }

        Err(RegisterUserError::InvalidSubmission(e)) => credential_error_response(&e),

        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }

        Err(RegisterUserError::HashingFailed(e)) | Err(RegisterUserError::RepositoryError(e)) => {
            error!(error = %e, "Failed to register user");
            ApiResponse::internal_error()
        }
    }
}
