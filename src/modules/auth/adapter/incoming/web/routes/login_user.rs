use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::{
    LoginAudience, LoginError, LoginRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "siti@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "hunter22")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Authenticated user
    user: UserView,
}

/// Citizen login
///
/// Authenticates a non-admin user and returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), LoginAudience::Applicant, &data).await
}

/// Administrator login
///
/// Authenticates an approved admin account.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials or account not approved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), LoginAudience::Administrator, &data).await
}

async fn login(dto: LoginRequestDto, audience: LoginAudience, data: &AppState) -> HttpResponse {
    info!(email = %dto.email, ?audience, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request, audience).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User logged in successfully");
            ApiResponse::success(LoginResponse {
                access_token: output.access_token,
                user: UserView::from(output.user),
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountNotApproved) => {
            warn!("Login failed: Account not approved");
            ApiResponse::unauthorized("ACCOUNT_NOT_APPROVED", "Account has not been approved")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
