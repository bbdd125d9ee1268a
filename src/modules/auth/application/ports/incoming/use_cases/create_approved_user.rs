use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::shared::domain::CredentialError;

#[derive(Debug, Clone)]
pub struct CreateApprovedUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateApprovedUserError {
    #[error("{0}")]
    InvalidField(CredentialError),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin shortcut that skips intake review: the user is approved and verified at once.
#[async_trait]
pub trait CreateApprovedUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateApprovedUserInput)
        -> Result<User, CreateApprovedUserError>;
}
