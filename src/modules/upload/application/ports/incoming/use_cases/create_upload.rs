use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{FilePolicyError, IncomingFile};
use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUploadError {
    #[error("{0}")]
    InvalidFile(#[from] FilePolicyError),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUploadUseCase: Send + Sync {
    async fn execute(
        &self,
        file: IncomingFile,
        owner: Option<UserId>,
    ) -> Result<Upload, CreateUploadError>;
}
