use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::shared::domain::{CredentialError, CredentialSubmission};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    InvalidSubmission(#[from] CredentialError),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Citizen intake: stores a pending, unverified, non-admin user.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, submission: CredentialSubmission) -> Result<User, RegisterUserError>;
}
