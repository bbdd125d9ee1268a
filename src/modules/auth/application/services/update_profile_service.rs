use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{UserPatch, UserRepository, UserRepositoryError};
use crate::shared::domain::credentials::{normalize_email, normalize_name};

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<User, UpdateProfileError> {
        let patch = UserPatch {
            name: input
                .name
                .as_deref()
                .map(normalize_name)
                .transpose()
                .map_err(UpdateProfileError::InvalidField)?,
            email: input
                .email
                .as_deref()
                .map(normalize_email)
                .transpose()
                .map_err(UpdateProfileError::InvalidField)?,
            ..Default::default()
        };

        if patch.is_empty() {
            return Err(UpdateProfileError::EmptyPatch);
        }

        self.user_repository
            .patch_user(user_id, patch)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateProfileError::NotFound,
                UserRepositoryError::EmailAlreadyExists => UpdateProfileError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
            })
    }
}
