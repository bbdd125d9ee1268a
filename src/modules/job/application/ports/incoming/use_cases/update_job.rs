use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, JobDraft, JobValidationError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateJobError {
    #[error("{0}")]
    Invalid(#[from] JobValidationError),

    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateJobUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: JobDraft) -> Result<Job, UpdateJobError>;
}
