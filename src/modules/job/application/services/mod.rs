mod category_stats_service;
mod create_job_service;
mod delete_job_service;
mod get_job_service;
mod list_jobs_service;
mod update_job_service;

pub use category_stats_service::CategoryStatsService;
pub use create_job_service::CreateJobService;
pub use delete_job_service::DeleteJobService;
pub use get_job_service::GetJobService;
pub use list_jobs_service::ListJobsService;
pub use update_job_service::UpdateJobService;
