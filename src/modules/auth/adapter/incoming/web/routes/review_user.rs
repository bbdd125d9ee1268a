use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::{UserId, UserView};
use crate::auth::application::ports::incoming::use_cases::{ReviewUserError, ReviewUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial review of a user. Omitted fields are kept.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewUserRequest {
    #[schema(example = "approved")]
    pub status: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<ReviewUserRequest> for ReviewUserInput {
    fn from(req: ReviewUserRequest) -> Self {
        ReviewUserInput {
            status: req.status,
            name: req.name,
            email: req.email,
        }
    }
}

/// Review or edit a user
///
/// `approved` also marks the user verified; `pending` and `rejected` clear the flag.
#[utoipa::path(
    patch,
    path = "/api/admin/user/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = ReviewUserRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserView>)),
        (
            status = 400,
            description = "Invalid status or empty patch",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_STATUS",
                    "message": "Invalid status: archived. Must be one of pending, approved, rejected"
                }
            })
        ),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
    )
)]
#[patch("/api/admin/user/{id}")]
pub async fn review_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .auth
        .review
        .execute(UserId::from(user_id), req.into_inner().into())
        .await
    {
        Ok(user) => {
            info!(%user_id, admin_id = %admin.user_id, status = %user.status, "User reviewed");
            ApiResponse::success(UserView::from(user))
        }

        Err(e @ ReviewUserError::InvalidStatus(_)) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }

        Err(e @ ReviewUserError::EmptyPatch) => {
            ApiResponse::bad_request("EMPTY_PATCH", &e.to_string())
        }

        Err(ReviewUserError::InvalidField(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ReviewUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ReviewUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }

        Err(ReviewUserError::RepositoryError(e)) => {
            error!(%user_id, error = %e, "Failed to review user");
            ApiResponse::internal_error()
        }
    }
}
