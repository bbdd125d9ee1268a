use async_trait::async_trait;
use uuid::Uuid;

use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUploadError {
    #[error("Upload not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUploadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Upload, GetUploadError>;
}
