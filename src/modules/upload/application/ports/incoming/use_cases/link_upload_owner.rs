use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkUploadOwnerError {
    #[error("Upload not found")]
    UploadNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LinkUploadOwnerUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<Upload, LinkUploadOwnerError>;
}
