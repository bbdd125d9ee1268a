use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::shared::domain::{FilePolicyError, IncomingFile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplaceUserFileError {
    #[error("{0}")]
    InvalidFile(#[from] FilePolicyError),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplaceUserFileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        slot: UserFileSlot,
        file: IncomingFile,
    ) -> Result<User, ReplaceUserFileError>;
}
