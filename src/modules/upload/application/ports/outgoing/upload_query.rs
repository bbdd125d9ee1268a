use async_trait::async_trait;
use uuid::Uuid;

use crate::upload::application::domain::entities::Upload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UploadQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Upload>, UploadQueryError>;

    /// Pending uploads, oldest first.
    async fn list_pending(&self) -> Result<Vec<Upload>, UploadQueryError>;
}
