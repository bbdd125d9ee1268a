pub mod category_stats;
pub mod create_job;
pub mod delete_job;
pub mod get_job;
pub mod list_jobs;
pub mod update_job;

pub use category_stats::{CategoryStatsError, CategoryStatsUseCase};
pub use create_job::{CreateJobError, CreateJobUseCase};
pub use delete_job::{DeleteJobError, DeleteJobUseCase};
pub use get_job::{GetJobError, GetJobUseCase};
pub use list_jobs::{ListJobsError, ListJobsUseCase};
pub use update_job::{UpdateJobError, UpdateJobUseCase};
