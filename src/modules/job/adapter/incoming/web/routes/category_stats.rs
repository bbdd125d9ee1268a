use actix_web::{get, http::StatusCode, web, Responder};
use tracing::error;

use crate::api::schemas::SuccessResponse;
use crate::job::application::domain::categories::{zero_filled, CategoryStat};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Job counts per category
///
/// Catalogue categories without jobs are listed with a zero count. When the
/// store is unavailable the response is a 500 that still carries the zero-filled
/// catalogue in `data`.
#[utoipa::path(
    get,
    path = "/api/jobs/categories",
    tag = "jobs",
    responses(
        (status = 200, description = "Category statistics", body = inline(SuccessResponse<Vec<CategoryStat>>)),
        (status = 500, description = "Store unavailable; zero-filled catalogue in data"),
    )
)]
#[get("/api/jobs/categories")]
pub async fn category_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.job.category_stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(error = %e, "Failed to count jobs per category");
            ApiResponse::degraded(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Category statistics are unavailable",
                zero_filled(),
            )
        }
    }
}
