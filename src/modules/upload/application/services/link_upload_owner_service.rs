use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{
    LinkUploadOwnerError, LinkUploadOwnerUseCase,
};
use crate::upload::application::ports::outgoing::{UploadRepository, UploadRepositoryError};

pub struct LinkUploadOwnerService<R>
where
    R: UploadRepository,
{
    repository: R,
}

impl<R> LinkUploadOwnerService<R>
where
    R: UploadRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LinkUploadOwnerUseCase for LinkUploadOwnerService<R>
where
    R: UploadRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, owner: UserId) -> Result<Upload, LinkUploadOwnerError> {
        self.repository
            .link_owner(id, owner)
            .await
            .map_err(|e| match e {
                UploadRepositoryError::UploadNotFound => LinkUploadOwnerError::UploadNotFound,
                UploadRepositoryError::UserNotFound => LinkUploadOwnerError::UserNotFound,
                UploadRepositoryError::DatabaseError(msg) => {
                    LinkUploadOwnerError::RepositoryError(msg)
                }
            })
    }
}
