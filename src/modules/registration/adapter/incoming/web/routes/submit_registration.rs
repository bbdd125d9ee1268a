use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{CredentialForm, ErrorResponse, SuccessResponse};
use crate::registration::application::domain::entities::RegistrationView;
use crate::registration::application::ports::incoming::use_cases::SubmitRegistrationError;
use crate::shared::api::multipart::{multipart_error_response, MultipartForm};
use crate::shared::api::{credential_error_response, ApiResponse};
use crate::shared::domain::CredentialSubmission;
use crate::AppState;

/// Administrator account request
///
/// Stores a pending registration. A user is created only when an admin approves it.
#[utoipa::path(
    post,
    path = "/api/admin/register",
    tag = "registration",
    request_body(content = inline(CredentialForm), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Registration stored", body = inline(SuccessResponse<RegistrationView>)),
        (status = 400, description = "Missing or invalid file, or invalid field", body = ErrorResponse),
        (status = 409, description = "Email already registered or pending", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/register")]
pub async fn submit_registration_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form =
        match MultipartForm::read(payload, "file", data.file_policy.max_file_size_bytes).await {
            Ok(form) => form,
            Err(e) => {
                warn!(error = %e, "Rejected admin registration body");
                return multipart_error_response(&e);
            }
        };

    let submission = CredentialSubmission {
        name: form.text_or_empty("name"),
        email: form.text_or_empty("email"),
        password: form.text_or_empty("password"),
        file: form.take_file(),
    };

    match data.registration.submit.execute(submission).await {
        Ok(reg) => {
            info!(registration_id = %reg.id, "Admin registration received");
            ApiResponse::created(RegistrationView::from(reg))
        }

        Err(SubmitRegistrationError::InvalidSubmission(e)) => credential_error_response(&e),

        Err(SubmitRegistrationError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }

        Err(SubmitRegistrationError::HashingFailed(e))
        | Err(SubmitRegistrationError::RepositoryError(e)) => {
            error!(error = %e, "Failed to store admin registration");
            ApiResponse::internal_error()
        }
    }
}
