use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    ReviewUserError, ReviewUserInput, ReviewUserUseCase,
};
use crate::auth::application::ports::outgoing::{UserPatch, UserRepository, UserRepositoryError};
use crate::shared::domain::credentials::{normalize_email, normalize_name};
use crate::shared::domain::ApprovalStatus;

pub struct ReviewUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> ReviewUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

/// Validates every supplied field before anything touches the store.
fn build_patch(input: ReviewUserInput) -> Result<UserPatch, ReviewUserError> {
    let status = input
        .status
        .as_deref()
        .map(str::parse::<ApprovalStatus>)
        .transpose()
        .map_err(|e| ReviewUserError::InvalidStatus(e.0))?;

    let name = input
        .name
        .as_deref()
        .map(normalize_name)
        .transpose()
        .map_err(ReviewUserError::InvalidField)?;

    let email = input
        .email
        .as_deref()
        .map(normalize_email)
        .transpose()
        .map_err(ReviewUserError::InvalidField)?;

    let patch = UserPatch {
        name,
        email,
        status,
        is_verified: status.map(|s| s.grants_verification()),
    };

    if patch.is_empty() {
        return Err(ReviewUserError::EmptyPatch);
    }
    Ok(patch)
}

#[async_trait]
impl<R> ReviewUserUseCase for ReviewUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: ReviewUserInput,
    ) -> Result<User, ReviewUserError> {
        let patch = build_patch(input)?;

        self.user_repository
            .patch_user(user_id, patch)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => ReviewUserError::NotFound,
                UserRepositoryError::EmailAlreadyExists => ReviewUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => ReviewUserError::RepositoryError(msg),
            })
    }
}
