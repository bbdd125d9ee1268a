use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{FilePolicy, IncomingFile};
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{
    CreateUploadError, CreateUploadUseCase,
};
use crate::upload::application::ports::outgoing::{UploadRepository, UploadRepositoryError};

pub struct CreateUploadService<R>
where
    R: UploadRepository,
{
    repository: R,
    file_policy: FilePolicy,
}

impl<R> CreateUploadService<R>
where
    R: UploadRepository,
{
    pub fn new(repository: R, file_policy: FilePolicy) -> Self {
        Self {
            repository,
            file_policy,
        }
    }
}

#[async_trait]
impl<R> CreateUploadUseCase for CreateUploadService<R>
where
    R: UploadRepository + Send + Sync,
{
    async fn execute(
        &self,
        file: IncomingFile,
        owner: Option<UserId>,
    ) -> Result<Upload, CreateUploadError> {
        let file = self.file_policy.validate(file)?;

        let upload = self
            .repository
            .create(file.into_stored(Utc::now()), owner)
            .await
            .map_err(|e| match e {
                UploadRepositoryError::UserNotFound => CreateUploadError::UserNotFound,
                other => CreateUploadError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(upload_id = %upload.id, linked = upload.user_id.is_some(), "File uploaded");
        Ok(upload)
    }
}
