use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::ListPendingUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Pending citizen accounts, oldest first
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Pending users", body = inline(SuccessResponse<Vec<UserView>>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_pending_users_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.list_pending.execute().await {
        Ok(users) => {
            let views: Vec<UserView> = users.iter().map(UserView::from).collect();
            ApiResponse::success(views)
        }
        Err(ListPendingUsersError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list pending users");
            ApiResponse::internal_error()
        }
    }
}
