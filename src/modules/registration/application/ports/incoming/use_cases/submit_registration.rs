use async_trait::async_trait;

use crate::registration::application::domain::entities::AdminRegistration;
use crate::shared::domain::{CredentialError, CredentialSubmission};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitRegistrationError {
    #[error("{0}")]
    InvalidSubmission(#[from] CredentialError),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitRegistrationUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: CredentialSubmission,
    ) -> Result<AdminRegistration, SubmitRegistrationError>;
}
