use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, JobDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, draft: JobDraft) -> Result<Job, JobRepositoryError>;

    async fn update(&self, id: Uuid, draft: JobDraft) -> Result<Job, JobRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError>;
}
