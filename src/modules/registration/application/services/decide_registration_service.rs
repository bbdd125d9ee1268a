use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::application::ports::incoming::use_cases::{
    DecideRegistrationError, DecideRegistrationUseCase, RegistrationDecision,
};
use crate::registration::application::ports::outgoing::{
    RegistrationRepository, RegistrationRepositoryError,
};
use crate::shared::domain::ApprovalStatus;

pub struct DecideRegistrationService<R>
where
    R: RegistrationRepository,
{
    repository: R,
}

impl<R> DecideRegistrationService<R>
where
    R: RegistrationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: RegistrationRepositoryError) -> DecideRegistrationError {
    match e {
        RegistrationRepositoryError::NotFound => DecideRegistrationError::NotFound,
        RegistrationRepositoryError::UserEmailTaken => DecideRegistrationError::EmailAlreadyExists,
        other => DecideRegistrationError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> DecideRegistrationUseCase for DecideRegistrationService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<RegistrationDecision, DecideRegistrationError> {
        let status = status
            .parse::<ApprovalStatus>()
            .map_err(|e| DecideRegistrationError::InvalidStatus(e.0))?;

        match status {
            ApprovalStatus::Approved => {
                let outcome = self
                    .repository
                    .approve_and_materialize(id)
                    .await
                    .map_err(map_repo_error)?;

                tracing::info!(
                    registration_id = %id,
                    user_id = %outcome.user_id,
                    created = outcome.created,
                    "Admin registration approved"
                );
                Ok(RegistrationDecision::Materialized(outcome))
            }
            other => {
                let updated = self
                    .repository
                    .set_status(id, other)
                    .await
                    .map_err(map_repo_error)?;
                Ok(RegistrationDecision::Updated(updated))
            }
        }
    }
}
