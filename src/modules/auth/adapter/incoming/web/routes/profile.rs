use actix_web::{get, patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::incoming::use_cases::{
    GetUserError, UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Own profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "profile",
    responses(
        (status = 200, description = "Caller's record", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.get.execute(user.id()).await {
        Ok(found) => ApiResponse::success(UserView::from(found)),
        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetUserError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Siti R.")]
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Edit own name or email
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated record", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Empty patch or invalid field", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
    )
)]
#[patch("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = UpdateProfileInput {
        name: req.name,
        email: req.email,
    };

    match data.auth.update_profile.execute(user.id(), input).await {
        Ok(updated) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(UserView::from(updated))
        }
        Err(e @ UpdateProfileError::EmptyPatch) => {
            ApiResponse::bad_request("EMPTY_PATCH", &e.to_string())
        }
        Err(UpdateProfileError::InvalidField(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::shared::domain::ApprovalStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth::{bearer, token_provider};
    use crate::tests::support::fixtures::sample_user;
    use crate::tests::support::stubs::{StubGetUser, StubUpdateProfile};

    #[actix_web::test]
    async fn test_get_own_profile() {
        let user = sample_user(false, ApprovalStatus::Approved);
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_get_user(StubGetUser(Ok(user.clone())))
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header(bearer(user.id.value(), false))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], user.id.to_string());
    }

    #[actix_web::test]
    async fn test_profile_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(token_provider()))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_update_profile() {
        let mut user = sample_user(false, ApprovalStatus::Approved);
        user.name = "Siti R.".to_string();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_update_profile(StubUpdateProfile(Ok(user.clone())))
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/me")
            .insert_header(bearer(user.id.value(), false))
            .set_json(json!({ "name": "Siti R." }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Siti R.");
    }

    #[actix_web::test]
    async fn test_update_profile_email_taken() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_update_profile(StubUpdateProfile(Err(
                            UpdateProfileError::EmailAlreadyExists,
                        )))
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/me")
            .insert_header(bearer(Uuid::new_v4(), false))
            .set_json(json!({ "email": "taken@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
