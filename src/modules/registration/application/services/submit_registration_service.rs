use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery};
use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::incoming::use_cases::{
    SubmitRegistrationError, SubmitRegistrationUseCase,
};
use crate::registration::application::ports::outgoing::{
    NewRegistration, RegistrationQuery, RegistrationRepository, RegistrationRepositoryError,
};
use crate::shared::domain::{CredentialSubmission, FilePolicy};

/// Intake for administrator accounts. Nothing becomes a user until approved.
pub struct SubmitRegistrationService<U, Q, R>
where
    U: UserQuery,
    Q: RegistrationQuery,
    R: RegistrationRepository,
{
    user_query: U,
    registration_query: Q,
    registration_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    file_policy: FilePolicy,
}

impl<U, Q, R> SubmitRegistrationService<U, Q, R>
where
    U: UserQuery,
    Q: RegistrationQuery,
    R: RegistrationRepository,
{
    pub fn new(
        user_query: U,
        registration_query: Q,
        registration_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        file_policy: FilePolicy,
    ) -> Self {
        Self {
            user_query,
            registration_query,
            registration_repository,
            password_hasher,
            file_policy,
        }
    }
}

#[async_trait]
impl<U, Q, R> SubmitRegistrationUseCase for SubmitRegistrationService<U, Q, R>
where
    U: UserQuery + Send + Sync,
    Q: RegistrationQuery + Send + Sync,
    R: RegistrationRepository + Send + Sync,
{
    async fn execute(
        &self,
        submission: CredentialSubmission,
    ) -> Result<AdminRegistration, SubmitRegistrationError> {
        let valid = submission.validate(&self.file_policy)?;

        let user_exists = self
            .user_query
            .find_by_email(&valid.email)
            .await
            .map_err(|e| SubmitRegistrationError::RepositoryError(e.to_string()))?
            .is_some();

        let already_pending = self
            .registration_query
            .find_pending_by_email(&valid.email)
            .await
            .map_err(|e| SubmitRegistrationError::RepositoryError(e.to_string()))?
            .is_some();

        if user_exists || already_pending {
            return Err(SubmitRegistrationError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| SubmitRegistrationError::HashingFailed(e.to_string()))?;

        let registration = self
            .registration_repository
            .create(NewRegistration {
                name: valid.name,
                email: valid.email,
                password_hash,
                is_admin: true,
                credential: valid.file.into_stored(Utc::now()),
            })
            .await
            .map_err(|e| match e {
                RegistrationRepositoryError::EmailAlreadyPending => {
                    SubmitRegistrationError::EmailAlreadyExists
                }
                other => SubmitRegistrationError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(registration_id = %registration.id, "Admin registration submitted");
        Ok(registration)
    }
}
