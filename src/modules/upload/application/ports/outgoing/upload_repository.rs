use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ApprovalStatus, StoredFile};
use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRepositoryError {
    #[error("Upload not found")]
    UploadNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UploadRepository: Send + Sync {
    async fn create(
        &self,
        file: StoredFile,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError>;

    /// Sets status and verification on the upload and cascades the flag to its owner,
    /// all or nothing. `owner` links the upload first when given.
    async fn review(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError>;

    async fn link_owner(&self, id: Uuid, owner: UserId) -> Result<Upload, UploadRepositoryError>;
}
