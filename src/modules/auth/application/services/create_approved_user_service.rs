use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::use_cases::{
    CreateApprovedUserError, CreateApprovedUserInput, CreateApprovedUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::shared::domain::credentials::{normalize_email, normalize_name, require_password};
use crate::shared::domain::ApprovalStatus;

pub struct CreateApprovedUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateApprovedUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> CreateApprovedUserUseCase for CreateApprovedUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: CreateApprovedUserInput,
    ) -> Result<User, CreateApprovedUserError> {
        let name = normalize_name(&input.name).map_err(CreateApprovedUserError::InvalidField)?;
        let email = normalize_email(&input.email).map_err(CreateApprovedUserError::InvalidField)?;
        let password =
            require_password(input.password).map_err(CreateApprovedUserError::InvalidField)?;

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateApprovedUserError::HashingFailed(e.to_string()))?;

        let user = self
            .user_repository
            .create_user(NewUser {
                name,
                email,
                password_hash,
                is_admin: input.is_admin,
                is_verified: true,
                status: ApprovalStatus::Approved,
                credential: None,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => {
                    CreateApprovedUserError::EmailAlreadyExists
                }
                other => CreateApprovedUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User created by administrator");
        Ok(user)
    }
}
