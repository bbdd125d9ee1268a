use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::incoming::use_cases::{
    CreateJobError, DeleteJobError, UpdateJobError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct JobRequest {
    #[schema(example = "Civil Engineer")]
    pub title: String,
    #[schema(example = "Department of Public Works")]
    pub company: String,
    #[schema(example = "Engineering")]
    pub category: String,
    #[schema(example = "City Hall")]
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub salary: Option<String>,
}

impl From<JobRequest> for JobDraft {
    fn from(req: JobRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            category: req.category,
            location: req.location,
            description: req.description,
            salary: req.salary,
        }
    }
}

/// Publish a job
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    request_body = JobRequest,
    responses(
        (status = 201, description = "Job created", body = inline(SuccessResponse<Job>)),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 403, description = "Administrator required", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/jobs")]
pub async fn create_job_handler(
    admin: AdminUser,
    req: web::Json<JobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.create.execute(req.into_inner().into()).await {
        Ok(job) => {
            info!(job_id = %job.id, admin_id = %admin.user_id, "Job published");
            ApiResponse::created(job)
        }
        Err(e @ CreateJobError::Invalid(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(CreateJobError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create job");
            ApiResponse::internal_error()
        }
    }
}

/// Replace a job's fields
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = JobRequest,
    responses(
        (status = 200, description = "Job updated", body = inline(SuccessResponse<Job>)),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/jobs/{id}")]
pub async fn update_job_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<JobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.job.update.execute(job_id, req.into_inner().into()).await {
        Ok(job) => ApiResponse::success(job),
        Err(e @ UpdateJobError::Invalid(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),
        Err(UpdateJobError::RepositoryError(e)) => {
            error!(%job_id, error = %e, "Failed to update job");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 404, description = "Job not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/jobs/{id}")]
pub async fn delete_job_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.job.delete.execute(job_id).await {
        Ok(()) => {
            info!(%job_id, admin_id = %admin.user_id, "Job removed");
            ApiResponse::no_content()
        }
        Err(DeleteJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),
        Err(DeleteJobError::RepositoryError(e)) => {
            error!(%job_id, error = %e, "Failed to delete job");
            ApiResponse::internal_error()
        }
    }
}
