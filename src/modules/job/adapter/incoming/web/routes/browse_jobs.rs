use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::job::application::domain::entities::Job;
use crate::job::application::ports::incoming::use_cases::GetJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListJobsQuery {
    /// Exact category name
    pub category: Option<String>,
}

/// Job listings, newest first
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "Jobs", body = inline(SuccessResponse<Vec<Job>>)),
    )
)]
#[get("/api/jobs")]
pub async fn list_jobs_handler(
    query: web::Query<ListJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.list.execute(query.into_inner().category).await {
        Ok(jobs) => ApiResponse::success(jobs),
        Err(e) => {
            error!(error = %e, "Failed to list jobs");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = inline(SuccessResponse<Job>)),
        (status = 404, description = "Job not found", body = ErrorResponse),
    )
)]
#[get("/api/jobs/{id}")]
pub async fn get_job_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let job_id = path.into_inner();

    match data.job.get.execute(job_id).await {
        Ok(job) => ApiResponse::success(job),
        Err(GetJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),
        Err(GetJobError::RepositoryError(e)) => {
            error!(%job_id, error = %e, "Failed to load job");
            ApiResponse::internal_error()
        }
    }
}
