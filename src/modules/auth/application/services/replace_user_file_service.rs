use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    ReplaceUserFileError, ReplaceUserFileUseCase,
};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::domain::{FilePolicy, IncomingFile};

pub struct ReplaceUserFileService<R>
where
    R: UserRepository,
{
    user_repository: R,
    file_policy: FilePolicy,
}

impl<R> ReplaceUserFileService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, file_policy: FilePolicy) -> Self {
        Self {
            user_repository,
            file_policy,
        }
    }
}

#[async_trait]
impl<R> ReplaceUserFileUseCase for ReplaceUserFileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        slot: UserFileSlot,
        file: IncomingFile,
    ) -> Result<User, ReplaceUserFileError> {
        let file = self.file_policy.validate(file)?;

        self.user_repository
            .set_file(user_id, slot, file.into_stored(Utc::now()))
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => ReplaceUserFileError::NotFound,
                other => ReplaceUserFileError::RepositoryError(other.to_string()),
            })
    }
}
