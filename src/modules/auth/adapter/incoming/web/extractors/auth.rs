use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// Any caller holding a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider missing from app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type != ACCESS_TOKEN_TYPE => {
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                ))))
            }
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                is_verified: claims.is_verified,
                is_admin: claims.is_admin,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// An authenticated caller whose token carries the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.is_admin => ready(Ok(AdminUser {
                user_id: user.user_id,
            })),
            Ok(user) => {
                tracing::warn!(user_id = %user.user_id, path = %req.path(), "Non-admin hit an admin route");
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator privileges required",
                ))))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
