use crate::api::schemas::{
    CredentialForm, ErrorDetail, ErrorResponse, FileForm, SuccessResponse, UploadForm,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CreateApprovedUserRequest, LoginRequestDto, LoginResponse, ReviewUserRequest,
    UpdateProfileRequest,
};
use crate::auth::application::domain::entities::UserView;
use crate::job::adapter::incoming::web::routes::JobRequest;
use crate::job::application::domain::categories::CategoryStat;
use crate::job::application::domain::entities::Job;
use crate::registration::adapter::incoming::web::routes::{
    DecideRegistrationRequest, MaterializedResponse,
};
use crate::registration::application::domain::entities::RegistrationView;
use crate::shared::domain::{ApprovalStatus, FileMetadata};
use crate::upload::adapter::incoming::web::routes::{LinkUploadOwnerRequest, ReviewUploadRequest};
use crate::upload::application::domain::entities::UploadView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Municipal Job Portal API",
        version = "1.0.0",
        description = "Credential intake, approval workflow and job board for the municipal job portal",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::admin_login_handler,

        // Profile endpoints
        crate::auth::adapter::incoming::web::routes::get_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::replace_credential_handler,
        crate::auth::adapter::incoming::web::routes::replace_picture_handler,

        // Admin user endpoints
        crate::auth::adapter::incoming::web::routes::list_pending_users_handler,
        crate::auth::adapter::incoming::web::routes::create_approved_user_handler,
        crate::auth::adapter::incoming::web::routes::get_user_handler,
        crate::auth::adapter::incoming::web::routes::download_user_credential_handler,
        crate::auth::adapter::incoming::web::routes::review_user_handler,

        // Admin registration endpoints
        crate::registration::adapter::incoming::web::routes::submit_registration_handler,
        crate::registration::adapter::incoming::web::routes::list_pending_registrations_handler,
        crate::registration::adapter::incoming::web::routes::get_registration_handler,
        crate::registration::adapter::incoming::web::routes::download_registration_file_handler,
        crate::registration::adapter::incoming::web::routes::decide_registration_handler,

        // Upload endpoints
        crate::upload::adapter::incoming::web::routes::create_upload_handler,
        crate::upload::adapter::incoming::web::routes::get_upload_handler,
        crate::upload::adapter::incoming::web::routes::download_upload_handler,
        crate::upload::adapter::incoming::web::routes::list_pending_uploads_handler,
        crate::upload::adapter::incoming::web::routes::review_upload_handler,
        crate::upload::adapter::incoming::web::routes::link_upload_owner_handler,

        // Job endpoints
        crate::job::adapter::incoming::web::routes::list_jobs_handler,
        crate::job::adapter::incoming::web::routes::category_stats_handler,
        crate::job::adapter::incoming::web::routes::get_job_handler,
        crate::job::adapter::incoming::web::routes::create_job_handler,
        crate::job::adapter::incoming::web::routes::update_job_handler,
        crate::job::adapter::incoming::web::routes::delete_job_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserView>,
            ErrorResponse,
            ErrorDetail,

            // Multipart bodies
            CredentialForm,
            FileForm,
            UploadForm,

            // Shared
            ApprovalStatus,
            FileMetadata,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            UserView,
            UpdateProfileRequest,
            CreateApprovedUserRequest,
            ReviewUserRequest,

            // Registration DTOs
            RegistrationView,
            DecideRegistrationRequest,
            MaterializedResponse,

            // Upload DTOs
            UploadView,
            ReviewUploadRequest,
            LinkUploadOwnerRequest,

            // Job DTOs
            Job,
            JobRequest,
            CategoryStat
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login endpoints"),
        (name = "profile", description = "Signed-in user's own profile"),
        (name = "admin", description = "User approval and management endpoints"),
        (name = "registration", description = "Admin registration workflow"),
        (name = "upload", description = "Generic file uploads and their review"),
        (name = "jobs", description = "Job board endpoints"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
