use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::domain::{ApprovalStatus, CredentialSubmission, FilePolicy};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    file_policy: FilePolicy,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        file_policy: FilePolicy,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            file_policy,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, submission: CredentialSubmission) -> Result<User, RegisterUserError> {
        let valid = submission.validate(&self.file_policy)?;

        // Fast path; the unique index still decides under concurrency.
        let existing = self
            .user_query
            .find_by_email(&valid.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .user_repository
            .create_user(NewUser {
                name: valid.name,
                email: valid.email,
                password_hash,
                is_admin: false,
                is_verified: false,
                status: ApprovalStatus::Pending,
                credential: Some(valid.file.into_stored(Utc::now())),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Applicant registered, awaiting review");
        Ok(user)
    }
}
