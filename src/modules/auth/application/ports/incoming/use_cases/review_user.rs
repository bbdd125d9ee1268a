use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::shared::domain::CredentialError;

/// Admin edit of a user. Omitted fields are kept.
#[derive(Debug, Clone, Default)]
pub struct ReviewUserInput {
    pub status: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewUserError {
    #[error("Invalid status: {0}. Must be one of pending, approved, rejected")]
    InvalidStatus(String),

    #[error("At least one of status, name or email must be provided")]
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
pub trait ReviewUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, input: ReviewUserInput)
        -> Result<User, ReviewUserError>;
}
