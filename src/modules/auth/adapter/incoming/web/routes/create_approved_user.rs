use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::{
    CreateApprovedUserError, CreateApprovedUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApprovedUserRequest {
    #[schema(example = "Budi Santoso")]
    pub name: String,
    #[schema(example = "budi@example.com")]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Create an approved user directly
///
/// Skips intake and review. The new account is approved and verified.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "admin",
    request_body = CreateApprovedUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
    )
)]
#[post("/api/admin/users")]
pub async fn create_approved_user_handler(
    admin: AdminUser,
    req: web::Json<CreateApprovedUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreateApprovedUserInput {
        name: req.name,
        email: req.email,
        password: req.password,
        is_admin: req.is_admin,
    };

    match data.auth.create_approved.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, admin_id = %admin.user_id, is_admin = user.is_admin, "Approved user created");
            ApiResponse::created(UserView::from(user))
        }

        Err(CreateApprovedUserError::InvalidField(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateApprovedUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }

        Err(CreateApprovedUserError::HashingFailed(e))
        | Err(CreateApprovedUserError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create approved user");
            ApiResponse::internal_error()
        }
    }
}
