use async_trait::async_trait;

use crate::job::application::domain::entities::{Job, JobDraft, JobValidationError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("{0}")]
    Invalid(#[from] JobValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateJobUseCase: Send + Sync {
    async fn execute(&self, draft: JobDraft) -> Result<Job, CreateJobError>;
}
