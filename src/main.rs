pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, job, registration, upload};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::{
    CreateApprovedUserService, GetUserService, ListPendingUsersService, LoginUserService,
    RegisterUserService, ReplaceUserFileService, ReviewUserService, UpdateProfileService,
};
use crate::auth::application::AuthUseCases;
use crate::job::adapter::outgoing::job_query_postgres::JobQueryPostgres;
use crate::job::adapter::outgoing::job_repository_postgres::JobRepositoryPostgres;
use crate::job::application::services::{
    CategoryStatsService, CreateJobService, DeleteJobService, GetJobService, ListJobsService,
    UpdateJobService,
};
use crate::job::application::JobUseCases;
use crate::registration::adapter::outgoing::registration_query_postgres::RegistrationQueryPostgres;
use crate::registration::adapter::outgoing::registration_repository_postgres::RegistrationRepositoryPostgres;
use crate::registration::application::services::{
    DecideRegistrationService, GetRegistrationService, ListPendingRegistrationsService,
    SubmitRegistrationService,
};
use crate::registration::application::RegistrationUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::domain::FilePolicy;
use crate::upload::adapter::outgoing::upload_query_postgres::UploadQueryPostgres;
use crate::upload::adapter::outgoing::upload_repository_postgres::UploadRepositoryPostgres;
use crate::upload::application::services::{
    CreateUploadService, GetUploadService, LinkUploadOwnerService, ListPendingUploadsService,
    ReviewUploadService,
};
use crate::upload::application::UploadUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub registration: RegistrationUseCases,
    pub upload: UploadUseCases,
    pub job: JobUseCases,
    pub file_policy: FilePolicy,
}

fn required_env(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{key} is not set in .env file"),
        )
    })
}

fn build_state(
    db: &Arc<DatabaseConnection>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    file_policy: FilePolicy,
) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let registration_query = RegistrationQueryPostgres::new(Arc::clone(db));
    let registration_repo = RegistrationRepositoryPostgres::new(Arc::clone(db));
    let upload_query = UploadQueryPostgres::new(Arc::clone(db));
    let upload_repo = UploadRepositoryPostgres::new(Arc::clone(db));
    let job_query = JobQueryPostgres::new(Arc::clone(db));
    let job_repo = JobRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            file_policy.clone(),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            token_provider,
        )),
        list_pending: Arc::new(ListPendingUsersService::new(user_query.clone())),
        get: Arc::new(GetUserService::new(user_query.clone())),
        review: Arc::new(ReviewUserService::new(user_repo.clone())),
        create_approved: Arc::new(CreateApprovedUserService::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        replace_file: Arc::new(ReplaceUserFileService::new(
            user_repo,
            file_policy.clone(),
        )),
    };

    let registration = RegistrationUseCases {
        submit: Arc::new(SubmitRegistrationService::new(
            user_query,
            registration_query.clone(),
            registration_repo.clone(),
            password_hasher,
            file_policy.clone(),
        )),
        list_pending: Arc::new(ListPendingRegistrationsService::new(
            registration_query.clone(),
        )),
        get: Arc::new(GetRegistrationService::new(registration_query)),
        decide: Arc::new(DecideRegistrationService::new(registration_repo)),
    };

    let upload = UploadUseCases {
        create: Arc::new(CreateUploadService::new(
            upload_repo.clone(),
            file_policy.clone(),
        )),
        get: Arc::new(GetUploadService::new(upload_query.clone())),
        list_pending: Arc::new(ListPendingUploadsService::new(upload_query)),
        review: Arc::new(ReviewUploadService::new(upload_repo.clone())),
        link_owner: Arc::new(LinkUploadOwnerService::new(upload_repo)),
    };

    let job = JobUseCases {
        list: Arc::new(ListJobsService::new(job_query.clone())),
        get: Arc::new(GetJobService::new(job_query.clone())),
        create: Arc::new(CreateJobService::new(job_repo.clone())),
        update: Arc::new(UpdateJobService::new(job_repo.clone())),
        delete: Arc::new(DeleteJobService::new(job_repo)),
        category_stats: Arc::new(CategoryStatsService::new(job_query)),
    };

    AppState {
        auth,
        registration,
        upload,
        job,
        file_policy,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = required_env("HOST")?;
    let port = required_env("PORT")?;

    let jwt_config =
        JwtConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let file_policy = FilePolicy::from_env();

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| io::Error::other(format!("Failed to connect to database: {e}")))?;
    let db_arc = Arc::new(conn);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let state = build_state(
        &db_arc,
        Arc::clone(&token_provider),
        password_hasher,
        file_policy,
    );

    let server_url = format!("{host}:{port}");
    info!(%server_url, env = %env_name, "Server listening");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::job::adapter::incoming::web::routes as job_routes;
    use crate::registration::adapter::incoming::web::routes as registration_routes;
    use crate::upload::adapter::incoming::web::routes as upload_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::admin_login_handler);
    // Profile
    cfg.service(auth_routes::get_profile_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::replace_credential_handler);
    cfg.service(auth_routes::replace_picture_handler);
    // Admin: users
    cfg.service(auth_routes::list_pending_users_handler);
    cfg.service(auth_routes::create_approved_user_handler);
    cfg.service(auth_routes::download_user_credential_handler);
    cfg.service(auth_routes::get_user_handler);
    cfg.service(auth_routes::review_user_handler);
    // Admin registrations
    cfg.service(registration_routes::submit_registration_handler);
    cfg.service(registration_routes::list_pending_registrations_handler);
    cfg.service(registration_routes::download_registration_file_handler);
    cfg.service(registration_routes::get_registration_handler);
    cfg.service(registration_routes::decide_registration_handler);
    // Uploads
    cfg.service(upload_routes::create_upload_handler);
    cfg.service(upload_routes::list_pending_uploads_handler);
    cfg.service(upload_routes::download_upload_handler);
    cfg.service(upload_routes::get_upload_handler);
    cfg.service(upload_routes::review_upload_handler);
    cfg.service(upload_routes::link_upload_owner_handler);
    // Jobs: the static categories path has to win over `{id}`
    cfg.service(job_routes::category_stats_handler);
    cfg.service(job_routes::list_jobs_handler);
    cfg.service(job_routes::get_job_handler);
    cfg.service(job_routes::create_job_handler);
    cfg.service(job_routes::update_job_handler);
    cfg.service(job_routes::delete_job_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
