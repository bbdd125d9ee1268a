use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::application::domain::entities::AdminRegistration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRegistrationError {
    #[error("Registration not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetRegistrationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<AdminRegistration, GetRegistrationError>;
}
