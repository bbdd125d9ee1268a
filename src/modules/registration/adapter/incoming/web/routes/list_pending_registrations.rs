use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::registration::application::domain::entities::RegistrationView;
use crate::registration::application::ports::incoming::use_cases::ListPendingRegistrationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Pending admin registrations, oldest first
#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    tag = "registration",
    responses(
        (status = 200, description = "Pending registrations", body = inline(SuccessResponse<Vec<RegistrationView>>)),
        (status = 403, description = "Admin only", body = ErrorResponse),
    )
)]
#[get("/api/admin/registrations")]
pub async fn list_pending_registrations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.registration.list_pending.execute().await {
        Ok(regs) => {
            let views: Vec<RegistrationView> = regs.iter().map(RegistrationView::from).collect();
            ApiResponse::success(views)
        }
        Err(ListPendingRegistrationsError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list registrations");
            ApiResponse::internal_error()
        }
    }
}
