use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::registration::application::domain::entities::{AdminRegistration, RegistrationView};
use crate::registration::application::ports::incoming::use_cases::GetRegistrationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn load(data: &AppState, id: Uuid) -> Result<AdminRegistration, HttpResponse> {
    match data.registration.get.execute(id).await {
        Ok(reg) => Ok(reg),
        Err(GetRegistrationError::NotFound) => Err(ApiResponse::not_found(
            "REGISTRATION_NOT_FOUND",
            "Registration not found",
        )),
        Err(GetRegistrationError::RepositoryError(e)) => {
            error!(registration_id = %id, error = %e, "Failed to load registration");
            Err(ApiResponse::internal_error())
        }
    }
}

/// Single admin registration
#[utoipa::path(
    get,
    path = "/api/admin/registration/{id}",
    tag = "registration",
    params(("id" = Uuid, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Registration found", body = inline(SuccessResponse<RegistrationView>)),
        (status = 404, description = "Registration not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/registration/{id}")]
pub async fn get_registration_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match load(&data, path.into_inner()).await {
        Ok(reg) => ApiResponse::success(RegistrationView::from(reg)),
        Err(resp) => resp,
    }
}

/// Download a registration's credential file
#[utoipa::path(
    get,
    path = "/api/admin/registration/file/{id}",
    tag = "registration",
    params(("id" = Uuid, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Raw file with its stored content type", content_type = "application/octet-stream"),
        (status = 404, description = "Registration not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/registration/file/{id}")]
pub async fn download_registration_file_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match load(&data, path.into_inner()).await {
        Ok(reg) => ApiResponse::attachment(
            &reg.credential.filename,
            &reg.credential.content_type,
            reg.credential.data,
        ),
        Err(resp) => resp,
    }
}
