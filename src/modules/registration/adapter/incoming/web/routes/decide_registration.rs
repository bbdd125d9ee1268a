use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::registration::application::domain::entities::RegistrationView;
use crate::registration::application::ports::incoming::use_cases::{
    DecideRegistrationError, RegistrationDecision,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecideRegistrationRequest {
    #[schema(example = "approved")]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterializedResponse {
    #[schema(example = "Registration approved")]
    pub message: String,
    pub user_id: Uuid,
    /// False when an account with the same email already existed
    pub created: bool,
}

/// Decide on an admin registration
///
/// `approved` creates the user and removes the registration in one transaction.
/// Other statuses only change the registration.
#[utoipa::path(
    patch,
    path = "/api/admin/registration/{id}",
    tag = "registration",
    params(("id" = Uuid, Path, description = "Registration ID")),
    request_body = DecideRegistrationRequest,
    responses(
        (status = 200, description = "Approved: user materialized", body = inline(SuccessResponse<MaterializedResponse>)),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 404, description = "Registration not found", body = ErrorResponse),
        (status = 409, description = "A user with this email appeared concurrently", body = ErrorResponse),
    )
)]
#[patch("/api/admin/registration/{id}")]
pub async fn decide_registration_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<DecideRegistrationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let registration_id = path.into_inner();

    match data
        .registration
        .decide
        .execute(registration_id, &req.status)
        .await
    {
        Ok(RegistrationDecision::Materialized(outcome)) => {
            info!(%registration_id, admin_id = %admin.user_id, user_id = %outcome.user_id, "Registration approved");
            ApiResponse::success(MaterializedResponse {
                message: "Registration approved".to_string(),
                user_id: outcome.user_id.value(),
                created: outcome.created,
            })
        }

        Ok(RegistrationDecision::Updated(reg)) => {
            info!(%registration_id, admin_id = %admin.user_id, status = %reg.status, "Registration status changed");
            ApiResponse::success(RegistrationView::from(reg))
        }

        Err(e @ DecideRegistrationError::InvalidStatus(_)) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }

        Err(DecideRegistrationError::NotFound) => {
            ApiResponse::not_found("REGISTRATION_NOT_FOUND", "Registration not found")
        }

        Err(DecideRegistrationError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "A user with this email already exists")
        }

        Err(DecideRegistrationError::RepositoryError(e)) => {
            error!(%registration_id, error = %e, "Failed to decide registration");
            ApiResponse::internal_error()
        }
    }
}
