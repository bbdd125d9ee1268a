use async_trait::async_trait;

use crate::registration::application::domain::entities::AdminRegistration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingRegistrationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPendingRegistrationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AdminRegistration>, ListPendingRegistrationsError>;
}
