mod job_query;
mod job_repository;

pub use job_query::{CategoryCount, JobQuery, JobQueryError};
pub use job_repository::{JobRepository, JobRepositoryError};
