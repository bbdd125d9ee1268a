use async_trait::async_trait;

use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingUploadsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPendingUploadsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Upload>, ListPendingUploadsError>;
}
