use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewUploadError {
    #[error("Invalid status: {0}. Must be one of pending, approved, rejected")]
    InvalidStatus(String),

    #[error("Upload not found")]
    UploadNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReviewUploadUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: &str,
        owner: Option<UserId>,
    ) -> Result<Upload, ReviewUploadError>;
}
