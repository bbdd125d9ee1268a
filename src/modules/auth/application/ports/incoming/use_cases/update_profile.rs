use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::shared::domain::CredentialError;

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("At least one of name or email must be provided")]
    EmptyPatch,

    #[error("{0}")]
    InvalidField(CredentialError),

    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<User, UpdateProfileError>;
}
