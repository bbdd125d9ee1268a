use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::Job;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetJobUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Job, GetJobError>;
}
