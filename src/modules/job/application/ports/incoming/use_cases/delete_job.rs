use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteJobUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteJobError>;
}
